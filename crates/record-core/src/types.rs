//! Field types for the record-csv framework.
//!
//! This module defines `UniversalType`, the closed set of conversion
//! strategies a record field can be registered with.

use std::fmt;

/// Universal field type representation for record-csv.
///
/// Every registered field carries exactly one `UniversalType`. It selects the
/// pair of text conversions (`value -> text` and `text -> value`) used for
/// that field's cells. The set is closed: a Rust type without a
/// [`CsvField`](crate::CsvField) implementation cannot be registered at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UniversalType {
    // Boolean
    /// Boolean value
    Bool,

    // Signed integers
    /// 8-bit signed integer
    Int8,

    /// 16-bit signed integer
    Int16,

    /// 32-bit signed integer
    Int32,

    /// 64-bit signed integer
    Int64,

    // Unsigned integers
    /// 8-bit unsigned integer
    UInt8,

    /// 16-bit unsigned integer
    UInt16,

    /// 32-bit unsigned integer
    UInt32,

    /// 64-bit unsigned integer
    UInt64,

    // Floating point
    /// 32-bit IEEE 754 floating point
    Float32,

    /// 64-bit IEEE 754 floating point
    Float64,

    // String types
    /// A single character
    Char,

    /// Unlimited text
    Text,

    // Binary types
    /// Binary data, base64 in CSV
    Bytes,

    // Temporal types
    /// Date only (YYYY-MM-DD)
    Date,

    /// Time only (HH:MM:SS with optional fraction)
    Time,

    /// Timestamp without timezone
    LocalDateTime,

    /// Timestamp in UTC
    ZonedDateTime,

    // Special types
    /// UUID (128-bit)
    Uuid,

    // Enumeration
    /// Enumeration type
    Enum {
        /// Allowed values; an empty list accepts any text
        values: Vec<String>,
    },
}

impl UniversalType {
    /// Create an enum type from its allowed values.
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::UInt8
                | Self::UInt16
                | Self::UInt32
                | Self::UInt64
                | Self::Float32
                | Self::Float64
        )
    }

    /// Check if this type is temporal.
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::Date | Self::Time | Self::LocalDateTime | Self::ZonedDateTime
        )
    }
}

impl fmt::Display for UniversalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt8 => "uint8",
            Self::UInt16 => "uint16",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Char => "char",
            Self::Text => "text",
            Self::Bytes => "bytes",
            Self::Date => "date",
            Self::Time => "time",
            Self::LocalDateTime => "date_time",
            Self::ZonedDateTime => "timestamp_tz",
            Self::Uuid => "uuid",
            Self::Enum { values } if values.is_empty() => "enum",
            Self::Enum { values } => return write!(f, "enum({})", values.join("|")),
        };
        f.write_str(name)
    }
}
