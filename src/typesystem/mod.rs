//! Read-only descriptor model of the introspected type system.
//!
//! The identifier encoder never talks to a concrete reflection mechanism. Instead, whatever
//! enumerates a compiled module (a metadata reader, a runtime reflection bridge, a test fixture)
//! produces snapshots of the types and members it wants identifiers for, and the encoder only
//! queries the structural facts recorded here.
//!
//! # Key Components
//!
//! - [`TypeRef`]: A type occurrence (declaring type, parameter type, generic argument, ...)
//! - [`TypeFlavor`]: Exclusive classification into named type, generic parameter, array, ...
//! - [`MemberRef`]: A method, constructor, field, property, event or nested type
//! - [`ParameterRef`]: A parameter type plus its `out` marker
//! - [`PrimitiveKind`]: The built-in `System` types
//!
//! # Examples
//!
//! ```rust
//! use cildocid::typesystem::{MemberRef, PrimitiveKind, TypeRef};
//!
//! let widget = TypeRef::named("Sample", "Widget").into_rc();
//! let add = MemberRef::method(&widget, "Add")
//!     .with_parameter(TypeRef::primitive(PrimitiveKind::I4).into_rc())
//!     .with_parameter(TypeRef::primitive(PrimitiveKind::I4).into_rc());
//!
//! assert_eq!(add.parameters.len(), 2);
//! assert_eq!(add.declaring_type.fullname(), "Sample.Widget");
//! ```

mod base;
mod members;
mod primitives;

pub(crate) use base::strip_arity;
pub use base::{TypeFlavor, TypeRef, TypeRefRc};
pub use members::{MemberFlags, MemberKind, MemberRef, MemberRefRc, ParameterRef};
pub use primitives::PrimitiveKind;
