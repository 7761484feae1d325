use thiserror::Error;

macro_rules! invalid_argument {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvalidArgument {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidArgument {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Identifier computation never retries and never falls back to a best-effort rendering; every
/// failure is raised at the point where a precondition was violated. Invalid input indicates a
/// bug in the component that produced the descriptor, not a transient condition.
///
/// # Error Categories
///
/// - [`Error::InvalidArgument`] - A descriptor or argument violates a precondition
/// - [`Error::Unsupported`] - The input uses a construct that has no identifier encoding
/// - [`Error::RecursionLimit`] - The type graph is deeper than the configured limit
///
/// # Examples
///
/// ```rust
/// use cildocid::{docid::field_id, typesystem::{MemberRef, TypeRef}, Error};
///
/// let widget = TypeRef::named("Sample", "Widget").into_rc();
/// let method = MemberRef::method(&widget, "Run");
///
/// match field_id(&method) {
///     Err(Error::InvalidArgument { message, .. }) => println!("rejected: {message}"),
///     Err(e) => println!("other error: {e}"),
///     Ok(id) => println!("{id}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A descriptor or argument violates the precondition of the requested operation.
    ///
    /// Raised for a member of the wrong kind passed to a kind-specific operation, an unknown
    /// prefix character, a malformed identifier string, or a structurally broken descriptor
    /// (e.g. an array of rank zero). The error includes the source location where the violation
    /// was detected.
    ///
    /// # Fields
    ///
    /// * `message` - Description naming the offending argument
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Invalid argument - {file}:{line}: {message}")]
    InvalidArgument {
        /// The message to be printed for the InvalidArgument error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// The input uses a construct that has no defined identifier encoding.
    ///
    /// Raised by [`crate::docid::member_id`] for member kinds outside the closed set of encodable
    /// kinds, and for type shapes such as function pointers.
    #[error("Unsupported - {0}")]
    Unsupported(String),

    /// Recursion limit reached.
    ///
    /// A well-formed type graph never nests deeper than a handful of levels; exceeding the
    /// configured depth means the descriptor graph is malformed or cyclic.
    ///
    /// The associated value shows the recursion limit that was reached.
    #[error("Reach the maximum recursion level allowed - {0}")]
    RecursionLimit(usize),
}
