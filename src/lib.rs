// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # cildocid
//!
//! Canonical, stable documentation identifiers for elements of the .NET type system.
//!
//! XML documentation files produced alongside .NET assemblies store each comment under a
//! textual key such as `M:Sample.Widget.Add(System.Int32,System.Int32)`. `cildocid` computes
//! exactly these keys for types, methods, constructors, fields, properties, events, nested
//! types, enum values, operators and indexers, so that externally authored comments can be
//! correlated back to the element they describe.
//!
//! ## Features
//!
//! - **Complete grammar** - generic arity at type and method scope, nested types, arrays of any
//!   rank, `out`/by-reference markers, indexers, constructors and conversion operators
//! - **Pure functions** - every operation only reads its input descriptor; encoders can be
//!   shared between threads without locking
//! - **Reflection agnostic** - the encoder queries a small descriptor model that any metadata
//!   reader or test fixture can populate
//! - **Explicit failures** - constructs without a defined encoding are errors, never guesses
//!
//! ## Quick Start
//!
//! ```rust
//! use cildocid::prelude::*;
//!
//! let widget = TypeRef::named("Sample", "Widget").into_rc();
//! let int = TypeRef::primitive(PrimitiveKind::I4).into_rc();
//!
//! let add = MemberRef::method(&widget, "Add")
//!     .with_parameter(int.clone())
//!     .with_parameter(int);
//!
//! assert_eq!(type_id(&widget)?, "T:Sample.Widget");
//! assert_eq!(member_id(&add)?, "M:Sample.Widget.Add(System.Int32,System.Int32)");
//! # Ok::<(), cildocid::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`typesystem`] - The read-only descriptor model the encoder queries
//! - [`docid`] - The identifier encoder, prefix table and id index
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Logging
//!
//! `cildocid` emits [`tracing`](https://docs.rs/tracing) events (`trace` while encoding, `debug`
//! for rejected members, `warn` for identifier collisions). No subscriber is installed by the
//! library.

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use cildocid::prelude::*;
///
/// let widget = TypeRef::named("Sample", "Widget").into_rc();
/// let run = MemberRef::method(&widget, "Run");
/// assert_eq!(DocIdEncoder::new().member_id(&run)?, "M:Sample.Widget.Run");
/// # Ok::<(), cildocid::Error>(())
/// ```
pub mod prelude;

/// Read-only descriptor model of types and members
///
/// The identifier encoder only ever queries this model. Whatever enumerates a compiled module
/// builds [`typesystem::TypeRef`] and [`typesystem::MemberRef`] snapshots for the elements it
/// wants identifiers for.
pub mod typesystem;

/// Computation of documentation identifiers
///
/// # Key Types
///
/// - [`docid::DocIdEncoder`] - Computes ids, configurable via [`docid::EncoderConfig`]
/// - [`docid::IdPrefix`] / [`docid::DocId`] - Category prefixes and parsed ids
/// - [`docid::DocIdIndex`] - Concurrent id -> member lookup with collision detection
///
/// # Main Functions
///
/// - [`docid::type_id`], [`docid::method_id`], [`docid::property_id`], [`docid::field_id`],
///   [`docid::event_id`], [`docid::enum_value_id`] - One operation per element category
/// - [`docid::member_id`] - Dispatch on the member kind
pub mod docid;

/// `cildocid` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `cildocid` Error type
///
/// # Examples
///
/// ```rust
/// use cildocid::{docid::IdPrefix, Error};
///
/// match IdPrefix::from_char('X') {
///     Ok(prefix) => println!("category {prefix}"),
///     Err(Error::InvalidArgument { message, .. }) => println!("rejected: {message}"),
///     Err(e) => println!("Error: {e}"),
/// }
/// ```
pub use error::Error;
