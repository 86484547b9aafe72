//! Kinds of in-memory operand values

use serde::{Deserialize, Serialize};
use std::fmt;

/// The variant of a [`SqlValue`](super::SqlValue), used in messages and listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// SQL NULL
    Null,
    /// Boolean value
    Boolean,
    /// 64-bit signed integer
    Integer,
    /// Double precision floating point
    Float,
    /// Arbitrary precision decimal
    Decimal,
    /// Character data
    String,
    /// Calendar date without time
    Date,
    /// Time of day
    Time,
    /// Date and time without zone
    DateTime,
    /// Date and time with a fixed offset
    Timestamp,
    /// Ordered collection of values
    Collection,
}

impl ValueKind {
    /// Whether values of this kind take part in numeric comparison
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float | Self::Decimal)
    }

    /// Whether values of this kind take part in temporal comparison
    pub fn is_temporal(self) -> bool {
        matches!(
            self,
            Self::Date | Self::Time | Self::DateTime | Self::Timestamp
        )
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Decimal => "Decimal",
            Self::String => "String",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::DateTime => "DateTime",
            Self::Timestamp => "Timestamp",
            Self::Collection => "Collection",
        };
        f.write_str(name)
    }
}
