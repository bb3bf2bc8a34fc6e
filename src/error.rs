//! Error types for reading and writing records.

use csv_types::CsvParseError;
use record_core::SchemaError;
use thiserror::Error;

/// Errors surfaced by the record-csv entry points.
///
/// Shape mismatches (unknown headers or columns, rows with too few or too many
/// cells) are never errors; those cells are skipped.
#[derive(Error, Debug)]
pub enum CsvError {
    /// The read target is a scalar such as a number or `String`, not a record.
    ///
    /// Raised before any input is decoded.
    #[error("Cannot read CSV rows into {type_name}: target must be a record type")]
    UnsupportedTarget { type_name: &'static str },

    /// The input bytes are not valid UTF-8.
    #[error("CSV input is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// A non-empty cell could not be converted to its field's type.
    #[error("Line {line}, column '{column}': {source}")]
    Conversion {
        /// 1-based line number among the non-empty lines (the header is line 1)
        line: usize,
        column: String,
        #[source]
        source: CsvParseError,
    },

    /// The record type's field registration is invalid, or a setter rejected a value.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Reading a write options file failed.
    #[error("Failed to read options file: {0}")]
    OptionsIo(#[from] std::io::Error),

    /// A write options document is not valid YAML for `WriteOptions`.
    #[error("Failed to parse options: {0}")]
    OptionsYaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, CsvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_target_display() {
        let error = CsvError::UnsupportedTarget { type_name: "i32" };
        assert_eq!(
            error.to_string(),
            "Cannot read CSV rows into i32: target must be a record type"
        );
    }

    #[test]
    fn test_conversion_display() {
        let source = csv_types::csv_string_to_typed_value(
            "abc",
            &record_core::UniversalType::Int32,
        )
        .unwrap_err();
        let error = CsvError::Conversion {
            line: 3,
            column: "Age".to_string(),
            source,
        };
        assert_eq!(
            error.to_string(),
            "Line 3, column 'Age': Failed to parse 'abc' as int32: invalid digit found in string"
        );
    }

    #[test]
    fn test_encoding_error_conversion() {
        let bytes = vec![0x66, 0x6f, 0xff];
        let utf8_error = std::str::from_utf8(&bytes).unwrap_err();
        let error: CsvError = utf8_error.into();
        assert!(matches!(error, CsvError::Encoding(_)));
    }

    #[test]
    fn test_schema_error_conversion() {
        let error: CsvError = SchemaError::NotWritable("Id".to_string()).into();
        assert!(matches!(error, CsvError::Schema(_)));
        assert_eq!(error.to_string(), "Schema error: Field 'Id' is not writable");
    }

    #[test]
    fn test_error_is_debug() {
        let error = CsvError::UnsupportedTarget { type_name: "String" };
        let debug_str = format!("{error:?}");
        assert!(debug_str.contains("UnsupportedTarget"));
    }
}
