//! CSV writer.
//!
//! Renders records as a header line followed by one line per record. Cells
//! are joined with `,` and never quoted, so text containing a comma or a line
//! break produces a document that does not read back cleanly.

use crate::columns::resolve_columns;
use crate::error::Result;
use crate::options::WriteOptions;
use csv_types::values_to_csv_line;
use record_core::{CsvRecord, UniversalValue};
use tracing::debug;

/// Line terminator emitted after every line, the header included.
pub const LINE_TERMINATOR: &str = "\n";

/// Write records as UTF-8 encoded CSV.
///
/// # Example
///
/// ```
/// use record_csv::{write_data_to_csv, CsvRecord, RecordSchema, SchemaError, WriteOptions};
///
/// #[derive(Default)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl CsvRecord for Point {
///     fn schema() -> Result<RecordSchema<Self>, SchemaError> {
///         RecordSchema::builder()
///             .field("X", |p: &Point| &p.x, |p: &mut Point| &mut p.x)
///             .field("Y", |p: &Point| &p.y, |p: &mut Point| &mut p.y)
///             .build()
///     }
/// }
///
/// let points = vec![Point { x: 1, y: 2 }, Point { x: -3, y: 4 }];
/// let bytes = write_data_to_csv(&points, &WriteOptions::default()).unwrap();
/// assert_eq!(bytes, b"X,Y\n1,2\n-3,4\n");
/// ```
pub fn write_data_to_csv<'a, R, I>(records: I, options: &WriteOptions) -> Result<Vec<u8>>
where
    R: CsvRecord,
    I: IntoIterator<Item = &'a R>,
{
    write_csv_string(records, options).map(String::into_bytes)
}

/// Write records as CSV text.
///
/// The output always has one header line plus one line per record, and every
/// data line has exactly one cell per resolved column. A column with no
/// matching readable field, or a field whose value is null, yields an empty
/// cell.
pub fn write_csv_string<'a, R, I>(records: I, options: &WriteOptions) -> Result<String>
where
    R: CsvRecord,
    I: IntoIterator<Item = &'a R>,
{
    let schema = R::schema()?;
    let columns = resolve_columns(&schema, options.columns.as_deref());

    // Resolve every column to its field once, not once per record.
    let fields: Vec<_> = columns.iter().map(|column| schema.field(column)).collect();

    let headers = options.headers.as_ref().unwrap_or(&columns);
    let mut csv = headers.join(",");
    csv.push_str(LINE_TERMINATOR);

    let mut record_count = 0usize;
    for record in records {
        let line = values_to_csv_line(fields.iter().map(|field| {
            field
                .and_then(|f| f.get(record))
                .unwrap_or(UniversalValue::Null)
        }));
        csv.push_str(&line);
        csv.push_str(LINE_TERMINATOR);
        record_count += 1;
    }

    debug!(
        "Wrote {record_count} {} records with {} columns",
        schema.type_name(),
        columns.len()
    );

    Ok(csv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use record_core::{RecordSchema, SchemaError};

    #[derive(Debug, Default, Clone)]
    struct Person {
        id: i32,
        name: String,
        nickname: Option<String>,
        active: bool,
    }

    impl CsvRecord for Person {
        fn schema() -> std::result::Result<RecordSchema<Self>, SchemaError> {
            RecordSchema::builder()
                .field("Id", |p: &Person| &p.id, |p: &mut Person| &mut p.id)
                .field("Name", |p: &Person| &p.name, |p: &mut Person| &mut p.name)
                .field(
                    "Nickname",
                    |p: &Person| &p.nickname,
                    |p: &mut Person| &mut p.nickname,
                )
                .field("Active", |p: &Person| &p.active, |p: &mut Person| &mut p.active)
                .build()
        }
    }

    fn people() -> Vec<Person> {
        vec![
            Person {
                id: 1,
                name: "Alice".to_string(),
                nickname: Some("Al".to_string()),
                active: true,
            },
            Person {
                id: 2,
                name: "Bob".to_string(),
                nickname: None,
                active: false,
            },
        ]
    }

    #[test]
    fn test_default_columns_and_headers() {
        let csv = write_csv_string(&people(), &WriteOptions::default()).unwrap();
        assert_eq!(
            csv,
            "Id,Name,Nickname,Active\n1,Alice,Al,true\n2,Bob,,false\n"
        );
    }

    #[test]
    fn test_explicit_columns_select_and_reorder() {
        let options = WriteOptions::new().with_columns(["Active", "Id"]);
        let csv = write_csv_string(&people(), &options).unwrap();
        assert_eq!(csv, "Active,Id\ntrue,1\nfalse,2\n");
    }

    #[test]
    fn test_unknown_column_yields_empty_cells() {
        let options = WriteOptions::new().with_columns(["Id", "Email", "Name"]);
        let csv = write_csv_string(&people(), &options).unwrap();
        assert_eq!(csv, "Id,Email,Name\n1,,Alice\n2,,Bob\n");
    }

    #[test]
    fn test_headers_replace_column_names() {
        let options = WriteOptions::new()
            .with_columns(["Id", "Name"])
            .with_headers(["Identifier", "Full Name"]);
        let csv = write_csv_string(&people(), &options).unwrap();
        assert_eq!(csv, "Identifier,Full Name\n1,Alice\n2,Bob\n");
    }

    #[test]
    fn test_headers_are_not_checked_against_columns() {
        let options = WriteOptions::new()
            .with_columns(["Id", "Name"])
            .with_headers(["Only"]);
        let csv = write_csv_string(&people(), &options).unwrap();
        assert_eq!(csv, "Only\n1,Alice\n2,Bob\n");
    }

    #[test]
    fn test_no_records_yields_header_only() {
        let options = WriteOptions::new().with_columns(["A", "B"]);
        let csv = write_csv_string(&Vec::<Person>::new(), &options).unwrap();
        assert_eq!(csv, "A,B\n");
    }

    #[test]
    fn test_commas_are_not_escaped() {
        let person = Person {
            id: 3,
            name: "Doe, Jane".to_string(),
            ..Person::default()
        };
        let options = WriteOptions::new().with_columns(["Id", "Name"]);
        let csv = write_csv_string([&person], &options).unwrap();
        assert_eq!(csv, "Id,Name\n3,Doe, Jane\n");
    }

    #[test]
    fn test_bytes_output_is_utf8() {
        let person = Person {
            id: 4,
            name: "Zoë".to_string(),
            ..Person::default()
        };
        let options = WriteOptions::new().with_columns(["Name"]);
        let bytes = write_data_to_csv([&person], &options).unwrap();
        assert_eq!(bytes, "Name\nZoë\n".as_bytes());
    }

    #[test]
    fn test_scalar_records_have_no_cells() {
        let csv = write_csv_string(&[1i32, 2, 3], &WriteOptions::default()).unwrap();
        assert_eq!(csv, "\n\n\n\n");
    }
}
