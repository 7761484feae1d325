//! Canonical documentation ids for types and members.
//!
//! A documentation id is a `Prefix:Body` string that identifies one program element. Externally
//! authored comment files store their entries keyed by these ids, so computing the id of a
//! member is all that is needed to correlate it with its documentation.
//!
//! # Grammar
//!
//! | Element             | Example                                                    |
//! |---------------------|------------------------------------------------------------|
//! | Type                | `T:Sample.Widget`                                          |
//! | Generic definition  | `` T:Sample.Box`1 ``                                       |
//! | Nested type         | `T:Sample.Widget.Part`                                     |
//! | Method              | `M:Sample.Widget.Add(System.Int32,System.Int32)`           |
//! | Constructor         | `M:Sample.Widget.#ctor(System.String)`                     |
//! | Generic method      | ``` M:Sample.Box`1.Map``1(`0,``0) ```                      |
//! | `out` parameter     | `M:Sample.Widget.TryParse(System.String,System.Int32@)`   |
//! | Arrays              | `M:Sample.Grid.Fill(System.Int32[],System.Int32[0:,0:])`  |
//! | Conversion operator | `M:Sample.Widget.op_Explicit(Sample.Widget)~System.String` |
//! | Indexer             | `P:Sample.Widget.Item(System.Int32)`                       |
//! | Field / enum value  | `F:Sample.Color.Red`                                       |
//! | Event               | `E:Sample.Widget.Changed`                                  |
//! | Namespace           | `N:Sample`                                                 |
//!
//! Generic parameters of the declaring type are written as one back-tick plus their position,
//! parameters of the method as two back-ticks plus their position. Closed generic types list
//! their arguments in braces in place of the arity suffix.
//!
//! # Examples
//!
//! ```rust
//! use cildocid::{docid, typesystem::{MemberRef, PrimitiveKind, TypeRef}};
//!
//! let widget = TypeRef::named("Sample", "Widget").into_rc();
//! let indexer_getter = MemberRef::method(&widget, "get_Item")
//!     .special_name()
//!     .with_parameter(TypeRef::primitive(PrimitiveKind::I4).into_rc());
//!
//! assert_eq!(docid::type_id(&widget)?, "T:Sample.Widget");
//! assert_eq!(docid::member_id(&indexer_getter)?, "P:Sample.Widget.Item(System.Int32)");
//! # Ok::<(), cildocid::Error>(())
//! ```

mod config;
mod encoder;
mod index;
mod prefix;

use rayon::prelude::*;

pub use config::{EncoderConfig, GenericScope};
pub use encoder::DocIdEncoder;
pub use index::DocIdIndex;
pub use prefix::{DocId, IdPrefix};

use crate::{
    typesystem::{MemberRef, MemberRefRc, TypeRef},
    Result,
};

/// `T:` id of a type, see [`DocIdEncoder::type_id`]
///
/// # Errors
/// Returns an error if the type graph is malformed or uses a construct without an encoding.
pub fn type_id(ty: &TypeRef) -> Result<String> {
    DocIdEncoder::default().type_id(ty)
}

/// `M:` id of a method or constructor, see [`DocIdEncoder::method_id`]
///
/// # Errors
/// Returns [`crate::Error::InvalidArgument`] if `method` is not a method or constructor.
pub fn method_id(method: &MemberRef) -> Result<String> {
    DocIdEncoder::default().method_id(method)
}

/// `P:` id of a property, see [`DocIdEncoder::property_id`]
///
/// # Errors
/// Returns [`crate::Error::InvalidArgument`] if `property` is not a property.
pub fn property_id(property: &MemberRef) -> Result<String> {
    DocIdEncoder::default().property_id(property)
}

/// `F:` id of a field, see [`DocIdEncoder::field_id`]
///
/// # Errors
/// Returns [`crate::Error::InvalidArgument`] if `field` is not a field.
pub fn field_id(field: &MemberRef) -> Result<String> {
    DocIdEncoder::default().field_id(field)
}

/// `E:` id of an event, see [`DocIdEncoder::event_id`]
///
/// # Errors
/// Returns [`crate::Error::InvalidArgument`] if `event` is not an event.
pub fn event_id(event: &MemberRef) -> Result<String> {
    DocIdEncoder::default().event_id(event)
}

/// `F:` id of an enumeration value, see [`DocIdEncoder::enum_value_id`]
///
/// # Errors
/// Returns [`crate::Error::InvalidArgument`] if `enum_type` is not an enum or `name` is empty.
pub fn enum_value_id(enum_type: &TypeRef, name: &str) -> Result<String> {
    DocIdEncoder::default().enum_value_id(enum_type, name)
}

/// `T:` id of a nested type member, see [`DocIdEncoder::nested_type_id`]
///
/// # Errors
/// Returns [`crate::Error::InvalidArgument`] if `nested` is not a nested type.
pub fn nested_type_id(nested: &MemberRef) -> Result<String> {
    DocIdEncoder::default().nested_type_id(nested)
}

/// `N:` id of a namespace
///
/// # Errors
/// Returns [`crate::Error::InvalidArgument`] if `namespace` is empty.
pub fn namespace_id(namespace: &str) -> Result<String> {
    DocIdEncoder::default().namespace_id(namespace)
}

/// Id of any member, dispatched on its kind, see [`DocIdEncoder::member_id`]
///
/// # Errors
/// Returns [`crate::Error::Unsupported`] for members without an identifier rule.
pub fn member_id(member: &MemberRef) -> Result<String> {
    DocIdEncoder::default().member_id(member)
}

/// Ids of many members, computed in parallel; the output order matches `members`
///
/// ## Arguments
/// * 'encoder' - The encoder to compute ids with
/// * 'members' - The members to encode
pub fn encode_all(encoder: &DocIdEncoder, members: &[MemberRefRc]) -> Vec<Result<String>> {
    members
        .par_iter()
        .map(|member| encoder.member_id(member))
        .collect()
}
