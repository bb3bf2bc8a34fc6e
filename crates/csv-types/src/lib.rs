//! CSV type conversions for record-core values.
//!
//! This crate provides bidirectional conversions between record-core's
//! `UniversalValue` and CSV cell text.
//!
//! # Modules
//!
//! - [`forward`] - UniversalValue → CSV string conversion
//! - [`reverse`] - CSV string → TypedValue conversion
//!
//! Cells are never quoted or escaped; a value whose text contains a comma or
//! a line break will not survive a round trip.
//!
//! # Example
//!
//! ```
//! use csv_types::{CsvStringWithSchema, CsvValue};
//! use record_core::{UniversalType, UniversalValue};
//!
//! // Forward: UniversalValue → CSV string
//! let csv_val = CsvValue::from(UniversalValue::Int32(42));
//! assert_eq!(csv_val.as_str(), "42");
//!
//! // Reverse: CSV string → TypedValue
//! let tv = CsvStringWithSchema::new("42", &UniversalType::Int32)
//!     .to_typed_value()
//!     .unwrap();
//! assert_eq!(tv.value, UniversalValue::Int32(42));
//! ```

pub mod forward;
pub mod reverse;

pub use forward::{values_to_csv_line, CsvValue};
pub use reverse::{csv_string_to_typed_value, CsvParseError, CsvStringWithSchema};
