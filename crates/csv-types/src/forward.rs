//! Forward conversion: UniversalValue → CSV string.
//!
//! This module provides conversion from record-core's `UniversalValue` to CSV
//! string values. Each value is rendered in its canonical text form with no
//! locale or precision rules applied.

use base64::Engine;
use record_core::{TypedValue, UniversalValue};

/// Wrapper for CSV string values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvValue(pub String);

impl CsvValue {
    /// Get the inner CSV string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get a reference to the inner CSV string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<TypedValue> for CsvValue {
    fn from(tv: TypedValue) -> Self {
        CsvValue::from(tv.value)
    }
}

impl From<UniversalValue> for CsvValue {
    fn from(value: UniversalValue) -> Self {
        match value {
            // Null - empty string
            UniversalValue::Null => CsvValue(String::new()),

            // Boolean
            UniversalValue::Bool(b) => CsvValue(if b {
                "true".to_string()
            } else {
                "false".to_string()
            }),

            // Integer types
            UniversalValue::Int8(i) => CsvValue(i.to_string()),
            UniversalValue::Int16(i) => CsvValue(i.to_string()),
            UniversalValue::Int32(i) => CsvValue(i.to_string()),
            UniversalValue::Int64(i) => CsvValue(i.to_string()),
            UniversalValue::UInt8(u) => CsvValue(u.to_string()),
            UniversalValue::UInt16(u) => CsvValue(u.to_string()),
            UniversalValue::UInt32(u) => CsvValue(u.to_string()),
            UniversalValue::UInt64(u) => CsvValue(u.to_string()),

            // Floating point
            UniversalValue::Float32(f) => CsvValue(f.to_string()),
            UniversalValue::Float64(f) => CsvValue(f.to_string()),

            // String types
            UniversalValue::Char(c) => CsvValue(c.to_string()),
            UniversalValue::String(s) => CsvValue(s),

            // Binary - base64 encode
            UniversalValue::Bytes(b) => {
                CsvValue(base64::engine::general_purpose::STANDARD.encode(b))
            }

            // Date/time types - ISO 8601 format
            UniversalValue::Date(d) => CsvValue(d.format("%Y-%m-%d").to_string()),
            UniversalValue::Time(t) => CsvValue(t.to_string()),
            UniversalValue::LocalDateTime(dt) => {
                CsvValue(dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
            }
            UniversalValue::ZonedDateTime(dt) => CsvValue(dt.to_rfc3339()),

            // UUID
            UniversalValue::Uuid(u) => CsvValue(u.to_string()),

            // Enum - member name
            UniversalValue::Enum(name) => CsvValue(name),
        }
    }
}

/// Convert a row of values to a CSV line (without the line terminator).
///
/// Cells are joined with `,` as-is. Text containing a comma is not quoted.
pub fn values_to_csv_line<I>(values: I) -> String
where
    I: IntoIterator<Item = UniversalValue>,
{
    let cells: Vec<String> = values
        .into_iter()
        .map(|v| CsvValue::from(v).into_inner())
        .collect();
    cells.join(",")
}
