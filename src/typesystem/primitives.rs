use std::fmt;

use strum::{EnumCount, EnumIter};

use crate::Result;

/// Built-in types of the runtime, which all live in the `System` namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum PrimitiveKind {
    /// System.Void
    Void,
    /// System.Boolean
    Boolean,
    /// System.Char
    Char,
    /// signed 8bit integer
    I1,
    /// unsigned 8bit integer
    U1,
    /// signed 16bit integer
    I2,
    /// unsigned 16bit integer
    U2,
    /// signed 32bit integer
    I4,
    /// unsigned 32bit integer
    U4,
    /// signed 64bit integer
    I8,
    /// unsigned 64bit integer
    U8,
    /// 32bit floating-point
    R4,
    /// 64bit floating-point
    R8,
    /// signed integer, sized to executing platform
    I,
    /// unsigned integer, sized to executing platform
    U,
    /// System.Object
    Object,
    /// System.String
    String,
    /// System.TypedReference
    TypedReference,
}

impl PrimitiveKind {
    /// Get the namespace of this type
    #[must_use]
    pub fn namespace(&self) -> &'static str {
        "System"
    }

    /// Get the short name (without namespace)
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Void => "Void",
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::Char => "Char",
            PrimitiveKind::I1 => "SByte",
            PrimitiveKind::U1 => "Byte",
            PrimitiveKind::I2 => "Int16",
            PrimitiveKind::U2 => "UInt16",
            PrimitiveKind::I4 => "Int32",
            PrimitiveKind::U4 => "UInt32",
            PrimitiveKind::I8 => "Int64",
            PrimitiveKind::U8 => "UInt64",
            PrimitiveKind::R4 => "Single",
            PrimitiveKind::R8 => "Double",
            PrimitiveKind::I => "IntPtr",
            PrimitiveKind::U => "UIntPtr",
            PrimitiveKind::Object => "Object",
            PrimitiveKind::String => "String",
            PrimitiveKind::TypedReference => "TypedReference",
        }
    }

    /// Try to map an ECMA-335 element type byte (§II.23.1.16) to a primitive
    ///
    /// ## Arguments
    /// * `byte` - The element type byte from a signature blob
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if the byte does not denote a primitive type.
    pub fn from_byte(byte: u8) -> Result<Self> {
        match byte {
            0x01 => Ok(PrimitiveKind::Void),
            0x02 => Ok(PrimitiveKind::Boolean),
            0x03 => Ok(PrimitiveKind::Char),
            0x04 => Ok(PrimitiveKind::I1),
            0x05 => Ok(PrimitiveKind::U1),
            0x06 => Ok(PrimitiveKind::I2),
            0x07 => Ok(PrimitiveKind::U2),
            0x08 => Ok(PrimitiveKind::I4),
            0x09 => Ok(PrimitiveKind::U4),
            0x0a => Ok(PrimitiveKind::I8),
            0x0b => Ok(PrimitiveKind::U8),
            0x0c => Ok(PrimitiveKind::R4),
            0x0d => Ok(PrimitiveKind::R8),
            0x0e => Ok(PrimitiveKind::String),
            0x16 => Ok(PrimitiveKind::TypedReference),
            0x18 => Ok(PrimitiveKind::I),
            0x19 => Ok(PrimitiveKind::U),
            0x1c => Ok(PrimitiveKind::Object),
            _ => Err(invalid_argument!(
                "element type 0x{:02x} is not a primitive",
                byte
            )),
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace(), self.name())
    }
}
