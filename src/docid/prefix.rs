//! Identifier prefixes and the `Prefix:Body` form of a documentation id.
//!
//! Every identifier starts with a single character naming the category of the element,
//! followed by a colon. The mapping is reversible so that keys read from a comment file can be
//! sorted back into categories.

use std::{fmt, str::FromStr};

use strum::{EnumCount, EnumIter};

use crate::{Error, Result};

/// Category tag of a documentation id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount)]
pub enum IdPrefix {
    /// `N` - namespace
    Namespace,
    /// `T` - type (class, struct, interface, enum, delegate, nested type)
    Type,
    /// `M` - method or constructor
    Method,
    /// `F` - field or enum value
    Field,
    /// `P` - property or indexer
    Property,
    /// `E` - event
    Event,
}

impl IdPrefix {
    /// The tag character
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            IdPrefix::Namespace => 'N',
            IdPrefix::Type => 'T',
            IdPrefix::Method => 'M',
            IdPrefix::Field => 'F',
            IdPrefix::Property => 'P',
            IdPrefix::Event => 'E',
        }
    }

    /// Look up the category of a tag character
    ///
    /// ## Arguments
    /// * 'tag' - The character in front of the colon
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] for characters that are not a known prefix.
    pub fn from_char(tag: char) -> Result<Self> {
        match tag {
            'N' => Ok(IdPrefix::Namespace),
            'T' => Ok(IdPrefix::Type),
            'M' => Ok(IdPrefix::Method),
            'F' => Ok(IdPrefix::Field),
            'P' => Ok(IdPrefix::Property),
            'E' => Ok(IdPrefix::Event),
            _ => Err(invalid_argument!("unknown identifier prefix '{}'", tag)),
        }
    }
}

impl TryFrom<char> for IdPrefix {
    type Error = Error;

    fn try_from(tag: char) -> Result<Self> {
        IdPrefix::from_char(tag)
    }
}

impl fmt::Display for IdPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A documentation id split into its category and body
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocId {
    /// Category of the element
    pub prefix: IdPrefix,
    /// Everything after the colon
    pub body: String,
}

impl DocId {
    /// Create a new `DocId`
    pub fn new(prefix: IdPrefix, body: impl Into<String>) -> Self {
        DocId {
            prefix,
            body: body.into(),
        }
    }

    /// Split a `Prefix:Body` string
    ///
    /// ## Arguments
    /// * 'id' - The identifier, e.g. "M:Sample.Widget.Run"
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if the colon is missing, the prefix is not a single
    /// known character, or the body is empty.
    pub fn parse(id: &str) -> Result<Self> {
        let Some((tag, body)) = id.split_once(':') else {
            return Err(invalid_argument!("identifier '{}' has no prefix", id));
        };

        let mut chars = tag.chars();
        let prefix = match (chars.next(), chars.next()) {
            (Some(tag), None) => IdPrefix::from_char(tag)?,
            _ => {
                return Err(invalid_argument!(
                    "identifier prefix '{}' must be a single character",
                    tag
                ))
            }
        };

        if body.is_empty() {
            return Err(invalid_argument!("identifier '{}' has an empty body", id));
        }

        Ok(DocId::new(prefix, body))
    }
}

impl FromStr for DocId {
    type Err = Error;

    fn from_str(id: &str) -> Result<Self> {
        DocId::parse(id)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.body)
    }
}
