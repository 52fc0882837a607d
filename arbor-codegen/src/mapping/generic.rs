//! Language-neutral scalar data types.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An abstract, language/dialect-neutral scalar data kind.
///
/// Domain properties carry one of these; each language or SQL dialect
/// maps it to concrete type syntax through its
/// [`DataTypeMappingTable`](crate::DataTypeMappingTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenericDataType {
    Int,
    SmallInt,
    BigInt,
    Decimal,
    Float,
    Bool,
    Char,
    VarChar,
    Text,
    Date,
    DateTime,
    Time,
    Guid,
    Binary,
    Json,
    Xml,
}

impl GenericDataType {
    /// All generic data types, in display order.
    pub const ALL: [GenericDataType; 16] = [
        Self::Int,
        Self::SmallInt,
        Self::BigInt,
        Self::Decimal,
        Self::Float,
        Self::Bool,
        Self::Char,
        Self::VarChar,
        Self::Text,
        Self::Date,
        Self::DateTime,
        Self::Time,
        Self::Guid,
        Self::Binary,
        Self::Json,
        Self::Xml,
    ];

    /// Display name, also the fallback text when a table has no mapping.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::SmallInt => "SmallInt",
            Self::BigInt => "BigInt",
            Self::Decimal => "Decimal",
            Self::Float => "Float",
            Self::Bool => "Bool",
            Self::Char => "Char",
            Self::VarChar => "VarChar",
            Self::Text => "Text",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::Time => "Time",
            Self::Guid => "Guid",
            Self::Binary => "Binary",
            Self::Json => "Json",
            Self::Xml => "Xml",
        }
    }

    /// Whether the type takes a length parameter.
    pub fn is_length_bearing(&self) -> bool {
        matches!(self, Self::Char | Self::VarChar | Self::Binary)
    }
}

impl fmt::Display for GenericDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Raised when a stored data-type name matches no generic type.
#[derive(Debug, Error)]
#[error("unknown generic data type '{0}'")]
pub struct ParseDataTypeError(pub String);

impl FromStr for GenericDataType {
    type Err = ParseDataTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDataTypeError(s.to_string()))
    }
}
