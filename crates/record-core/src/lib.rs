//! Core types for the record-csv framework.
//!
//! This crate describes the shape of a record so that it can be written to
//! and read from CSV text without runtime reflection:
//!
//! - [`UniversalType`] - The closed set of conversion strategies a field can use
//! - [`UniversalValue`] - A field value detached from its record
//! - [`TypedValue`] - A value paired with the strategy that produced it
//! - [`CsvField`] - Maps a Rust field type to its strategy
//! - [`RecordSchema`] - Ordered field descriptors with accessor pairs
//! - [`CsvRecord`] - Implemented by every type that can be read or written
//!
//! # Architecture
//!
//! ```text
//! record-core (this crate)
//!    │
//!    ├─── csv-types   (text <-> UniversalValue per UniversalType)
//!    │
//!    └─── record-csv  (column resolution, writer, reader)
//! ```
//!
//! # Example
//!
//! ```rust
//! use record_core::{CsvRecord, RecordSchema, SchemaError};
//!
//! #[derive(Debug, Default)]
//! struct User {
//!     id: i64,
//!     name: String,
//! }
//!
//! impl CsvRecord for User {
//!     fn schema() -> Result<RecordSchema<Self>, SchemaError> {
//!         RecordSchema::builder()
//!             .field("Id", |u: &User| &u.id, |u: &mut User| &mut u.id)
//!             .field("Name", |u: &User| &u.name, |u: &mut User| &mut u.name)
//!             .build()
//!     }
//! }
//!
//! let schema = User::schema().unwrap();
//! assert_eq!(schema.field_names().collect::<Vec<_>>(), vec!["Id", "Name"]);
//! ```

pub mod field;
pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use field::CsvField;
pub use schema::{CsvRecord, FieldSchema, RecordKind, RecordSchema, RecordSchemaBuilder, SchemaError};
pub use types::UniversalType;
pub use values::{TypedValue, UniversalValue};
