//! # cildocid Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and functions
//! from the cildocid library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all cildocid operations
pub use crate::Error;

/// The result type used throughout cildocid
pub use crate::Result;

// ================================================================================================
// Descriptor Model
// ================================================================================================

/// Types, members and parameters as reported by the introspection facility
pub use crate::typesystem::{
    MemberFlags, MemberKind, MemberRef, MemberRefRc, ParameterRef, PrimitiveKind, TypeFlavor,
    TypeRef, TypeRefRc,
};

// ================================================================================================
// Identifier Encoding
// ================================================================================================

/// Encoder, configuration, prefixes and the identifier index
pub use crate::docid::{
    DocId, DocIdEncoder, DocIdIndex, EncoderConfig, GenericScope, IdPrefix,
};

/// One function per element category, plus the kind dispatcher
pub use crate::docid::{
    encode_all, enum_value_id, event_id, field_id, member_id, method_id, namespace_id,
    nested_type_id, property_id, type_id,
};
