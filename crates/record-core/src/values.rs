//! Value representations for the record-csv framework.
//!
//! This module defines the intermediate value types that sit between a
//! record's Rust fields and their CSV text.

use crate::types::UniversalType;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

/// A field value detached from its record.
///
/// `UniversalValue` is what a field getter produces and what a field setter
/// consumes. Each variant corresponds to one [`UniversalType`] strategy, plus
/// `Null` for absent values.
#[derive(Debug, Clone, PartialEq)]
pub enum UniversalValue {
    /// Absent value
    Null,

    /// Boolean value
    Bool(bool),

    /// 8-bit signed integer
    Int8(i8),

    /// 16-bit signed integer
    Int16(i16),

    /// 32-bit signed integer
    Int32(i32),

    /// 64-bit signed integer
    Int64(i64),

    /// 8-bit unsigned integer
    UInt8(u8),

    /// 16-bit unsigned integer
    UInt16(u16),

    /// 32-bit unsigned integer
    UInt32(u32),

    /// 64-bit unsigned integer
    UInt64(u64),

    /// 32-bit floating point
    Float32(f32),

    /// 64-bit floating point
    Float64(f64),

    /// Single character
    Char(char),

    /// String value
    String(String),

    /// Binary data
    Bytes(Vec<u8>),

    /// Calendar date
    Date(NaiveDate),

    /// Time of day
    Time(NaiveTime),

    /// Date and time without timezone
    LocalDateTime(NaiveDateTime),

    /// Date and time in UTC
    ZonedDateTime(DateTime<Utc>),

    /// UUID value
    Uuid(Uuid),

    /// Enumeration member name
    Enum(String),
}

impl UniversalValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the variant, used in mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int8(_) => "int8",
            Self::Int16(_) => "int16",
            Self::Int32(_) => "int32",
            Self::Int64(_) => "int64",
            Self::UInt8(_) => "uint8",
            Self::UInt16(_) => "uint16",
            Self::UInt32(_) => "uint32",
            Self::UInt64(_) => "uint64",
            Self::Float32(_) => "float32",
            Self::Float64(_) => "float64",
            Self::Char(_) => "char",
            Self::String(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::Date(_) => "date",
            Self::Time(_) => "time",
            Self::LocalDateTime(_) => "date_time",
            Self::ZonedDateTime(_) => "timestamp_tz",
            Self::Uuid(_) => "uuid",
            Self::Enum(_) => "enum",
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Enum(s) => Some(s),
            _ => None,
        }
    }
}

/// Typed value with its UniversalType for conversion.
///
/// `TypedValue` combines a `UniversalValue` with the strategy that produced
/// it, so a `Null` still knows which field type it stands in for.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    /// The conversion strategy
    pub universal_type: UniversalType,

    /// The value
    pub value: UniversalValue,
}

impl TypedValue {
    /// Create a new typed value.
    pub fn new(universal_type: UniversalType, value: UniversalValue) -> Self {
        Self {
            universal_type,
            value,
        }
    }

    /// Create a null typed value with a specified type.
    pub fn null(universal_type: UniversalType) -> Self {
        Self::new(universal_type, UniversalValue::Null)
    }

    /// Create a boolean typed value.
    pub fn bool(value: bool) -> Self {
        Self::new(UniversalType::Bool, UniversalValue::Bool(value))
    }

    /// Create a 64-bit integer typed value.
    pub fn int64(value: i64) -> Self {
        Self::new(UniversalType::Int64, UniversalValue::Int64(value))
    }

    /// Create a text typed value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(UniversalType::Text, UniversalValue::String(value.into()))
    }

    /// Create a UUID typed value.
    pub fn uuid(value: Uuid) -> Self {
        Self::new(UniversalType::Uuid, UniversalValue::Uuid(value))
    }

    /// Check if this typed value is null.
    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// Consume the wrapper and return the bare value.
    pub fn into_value(self) -> UniversalValue {
        self.value
    }
}
