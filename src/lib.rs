//! record-csv Library
//!
//! Converts between sequences of typed records and simple comma-separated
//! text.
//!
//! # Features
//!
//! - Column selection: write all registered fields, or a chosen subset in any order
//! - Display headers: replace the header line text without renaming fields
//! - Typed cells: numbers, booleans, dates, UUIDs, enums, and `Option<T>` of each
//! - Lenient reading: unknown headers and ragged rows are skipped, not rejected
//!
//! The format is deliberately minimal. There is no quoting or escaping, so a
//! value containing a comma or a line break does not survive a round trip.
//!
//! # Crates
//!
//! - `record_core` - record descriptors ([`RecordSchema`], [`CsvRecord`], [`CsvField`])
//! - `csv_types` - per-cell text conversion
//!
//! # Usage
//!
//! ```
//! use record_csv::{read_csv, write_data_to_csv, CsvRecord, RecordSchema, SchemaError, WriteOptions};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct User {
//!     id: i64,
//!     name: String,
//!     active: bool,
//! }
//!
//! impl CsvRecord for User {
//!     fn schema() -> Result<RecordSchema<Self>, SchemaError> {
//!         RecordSchema::builder()
//!             .field("Id", |u: &User| &u.id, |u: &mut User| &mut u.id)
//!             .field("Name", |u: &User| &u.name, |u: &mut User| &mut u.name)
//!             .field("Active", |u: &User| &u.active, |u: &mut User| &mut u.active)
//!             .build()
//!     }
//! }
//!
//! let users = vec![User { id: 1, name: "Ada".into(), active: true }];
//! let bytes = write_data_to_csv(&users, &WriteOptions::default()).unwrap();
//! assert_eq!(bytes, b"Id,Name,Active\n1,Ada,true\n");
//!
//! let back: Vec<User> = read_csv(&bytes).unwrap();
//! assert_eq!(back, users);
//! ```

pub mod columns;
pub mod error;
pub mod options;
pub mod reader;
pub mod writer;

pub use columns::resolve_columns;
pub use error::{CsvError, Result};
pub use options::WriteOptions;
pub use reader::{read_csv, read_csv_str};
pub use writer::{write_csv_string, write_data_to_csv, LINE_TERMINATOR};

// Re-export the descriptor types so callers need a single dependency
pub use record_core::{
    CsvField, CsvRecord, FieldSchema, RecordSchema, SchemaError, UniversalType, UniversalValue,
};
