//! Reverse conversion: CSV string → TypedValue.
//!
//! This module provides conversion from CSV string values to record-core's
//! `TypedValue`, guided by the field's `UniversalType`.

use base64::Engine;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use record_core::{TypedValue, UniversalType, UniversalValue};
use std::str::FromStr;

/// A CSV string with schema information for reverse conversion.
///
/// This struct enables converting CSV string values to `TypedValue` using
/// schema information to guide parsing.
#[derive(Debug, Clone)]
pub struct CsvStringWithSchema<'a> {
    /// The CSV string value
    pub value: &'a str,
    /// The target schema type
    pub schema_type: &'a UniversalType,
}

impl<'a> CsvStringWithSchema<'a> {
    /// Create a new CSV string with schema.
    pub fn new(value: &'a str, schema_type: &'a UniversalType) -> Self {
        Self { value, schema_type }
    }

    /// Convert to TypedValue based on schema.
    pub fn to_typed_value(&self) -> Result<TypedValue, CsvParseError> {
        csv_string_to_typed_value(self.value, self.schema_type)
    }
}

/// Error type for CSV parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to parse '{value}' as {expected_type}: {message}")]
pub struct CsvParseError {
    pub message: String,
    pub value: String,
    pub expected_type: String,
}

impl CsvParseError {
    fn new(message: impl Into<String>, value: &str, expected_type: &UniversalType) -> Self {
        Self {
            message: message.into(),
            value: value.to_string(),
            expected_type: expected_type.to_string(),
        }
    }
}

/// Parse a number of the exact target width, reporting overflow as an error.
fn parse_number<T>(
    value: &str,
    schema_type: &UniversalType,
    wrap: fn(T) -> UniversalValue,
) -> Result<TypedValue, CsvParseError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map(|n| TypedValue::new(schema_type.clone(), wrap(n)))
        .map_err(|e| CsvParseError::new(e.to_string(), value, schema_type))
}

/// Parse a CSV string value according to the schema type.
///
/// This is the reverse of `CsvValue::from(UniversalValue)`. An empty cell is
/// a null of the requested type for every strategy; the field decides what
/// null means (zero value or `None`).
pub fn csv_string_to_typed_value(
    value: &str,
    schema_type: &UniversalType,
) -> Result<TypedValue, CsvParseError> {
    if value.is_empty() {
        return Ok(TypedValue::null(schema_type.clone()));
    }

    // Numbers and dates tolerate surrounding whitespace; text keeps it.
    let trimmed = if schema_type.is_numeric() || schema_type.is_temporal() {
        value.trim()
    } else {
        value
    };

    match schema_type {
        // Boolean - lenient parsing
        UniversalType::Bool => match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "t" | "y" => Ok(TypedValue::bool(true)),
            "false" | "0" | "no" | "f" | "n" => Ok(TypedValue::bool(false)),
            _ => Err(CsvParseError::new("Invalid boolean value", value, schema_type)),
        },

        // Integer types
        UniversalType::Int8 => parse_number(trimmed, schema_type, UniversalValue::Int8),
        UniversalType::Int16 => parse_number(trimmed, schema_type, UniversalValue::Int16),
        UniversalType::Int32 => parse_number(trimmed, schema_type, UniversalValue::Int32),
        UniversalType::Int64 => parse_number(trimmed, schema_type, UniversalValue::Int64),
        UniversalType::UInt8 => parse_number(trimmed, schema_type, UniversalValue::UInt8),
        UniversalType::UInt16 => parse_number(trimmed, schema_type, UniversalValue::UInt16),
        UniversalType::UInt32 => parse_number(trimmed, schema_type, UniversalValue::UInt32),
        UniversalType::UInt64 => parse_number(trimmed, schema_type, UniversalValue::UInt64),

        // Float types
        UniversalType::Float32 => parse_number(trimmed, schema_type, UniversalValue::Float32),
        UniversalType::Float64 => parse_number(trimmed, schema_type, UniversalValue::Float64),

        // Char - exactly one character
        UniversalType::Char => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(TypedValue::new(
                    schema_type.clone(),
                    UniversalValue::Char(c),
                )),
                _ => Err(CsvParseError::new(
                    "Expected exactly one character",
                    value,
                    schema_type,
                )),
            }
        }

        // Text - taken verbatim
        UniversalType::Text => Ok(TypedValue::text(value)),

        // Binary - base64 decode
        UniversalType::Bytes => match base64::engine::general_purpose::STANDARD.decode(value) {
            Ok(bytes) => Ok(TypedValue::new(
                schema_type.clone(),
                UniversalValue::Bytes(bytes),
            )),
            Err(_) => Err(CsvParseError::new("Invalid base64", value, schema_type)),
        },

        // Date - YYYY-MM-DD format
        UniversalType::Date => match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            Ok(date) => Ok(TypedValue::new(
                schema_type.clone(),
                UniversalValue::Date(date),
            )),
            Err(_) => Err(CsvParseError::new(
                "Invalid date format (expected YYYY-MM-DD)",
                value,
                schema_type,
            )),
        },

        // Time - HH:MM:SS with optional fraction
        UniversalType::Time => match NaiveTime::parse_from_str(trimmed, "%H:%M:%S%.f") {
            Ok(time) => Ok(TypedValue::new(
                schema_type.clone(),
                UniversalValue::Time(time),
            )),
            Err(_) => Err(CsvParseError::new(
                "Invalid time format (expected HH:MM:SS)",
                value,
                schema_type,
            )),
        },

        // Local date-time - ISO 8601 with `T` or a space
        UniversalType::LocalDateTime => match parse_naive_datetime(trimmed) {
            Some(dt) => Ok(TypedValue::new(
                schema_type.clone(),
                UniversalValue::LocalDateTime(dt),
            )),
            None => Err(CsvParseError::new(
                "Invalid datetime format",
                value,
                schema_type,
            )),
        },

        // Zoned date-time - RFC3339 format with naive fallbacks taken as UTC
        UniversalType::ZonedDateTime => {
            if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
                return Ok(TypedValue::new(
                    schema_type.clone(),
                    UniversalValue::ZonedDateTime(dt.with_timezone(&Utc)),
                ));
            }
            match parse_naive_datetime(trimmed) {
                Some(ndt) => Ok(TypedValue::new(
                    schema_type.clone(),
                    UniversalValue::ZonedDateTime(ndt.and_utc()),
                )),
                None => Err(CsvParseError::new(
                    "Invalid datetime format",
                    value,
                    schema_type,
                )),
            }
        }

        // UUID
        UniversalType::Uuid => match uuid::Uuid::parse_str(value.trim()) {
            Ok(uuid) => Ok(TypedValue::uuid(uuid)),
            Err(_) => Err(CsvParseError::new("Invalid UUID", value, schema_type)),
        },

        // Enum - validate against allowed values when any are declared
        UniversalType::Enum { values } => {
            if values.is_empty() || values.iter().any(|v| v == value) {
                Ok(TypedValue::new(
                    schema_type.clone(),
                    UniversalValue::Enum(value.to_string()),
                ))
            } else {
                Err(CsvParseError::new(
                    format!("Expected one of: {}", values.join(", ")),
                    value,
                    schema_type,
                ))
            }
        }
    }
}

/// Parse a date-time without timezone, with `T` or a space as separator.
fn parse_naive_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}
