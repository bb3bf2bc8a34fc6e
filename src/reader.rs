//! CSV reader.
//!
//! The first non-empty line is the header. Each header entry is matched by
//! exact name against the record's writable fields; every following line
//! becomes one record, built from `Default` and filled in cell by cell.
//!
//! Rows do not have to match the header's width. Cells past the end of the
//! header are dropped, and fields past the end of a short row keep their
//! default value.

use crate::error::{CsvError, Result};
use csv_types::csv_string_to_typed_value;
use record_core::{CsvRecord, FieldSchema, RecordSchema};
use tracing::{debug, trace};

/// Read records from UTF-8 encoded CSV.
///
/// Fails with [`CsvError::UnsupportedTarget`] before touching `data` when `R`
/// is a scalar type.
pub fn read_csv<R: CsvRecord>(data: &[u8]) -> Result<Vec<R>> {
    let schema = record_schema::<R>()?;
    let text = std::str::from_utf8(data)?;
    read_with_schema(text, &schema)
}

/// Read records from CSV text.
pub fn read_csv_str<R: CsvRecord>(text: &str) -> Result<Vec<R>> {
    let schema = record_schema::<R>()?;
    read_with_schema(text, &schema)
}

/// Build `R`'s schema, rejecting scalar targets.
fn record_schema<R: CsvRecord>() -> Result<RecordSchema<R>> {
    let schema = R::schema()?;
    if schema.is_scalar() {
        return Err(CsvError::UnsupportedTarget {
            type_name: schema.type_name(),
        });
    }
    Ok(schema)
}

fn read_with_schema<R: CsvRecord>(text: &str, schema: &RecordSchema<R>) -> Result<Vec<R>> {
    let lines: Vec<&str> = text
        .split(&['\r', '\n'][..])
        .filter(|line| !line.is_empty())
        .collect();

    let Some((header_line, data_lines)) = lines.split_first() else {
        return Ok(Vec::new());
    };
    if data_lines.is_empty() {
        return Ok(Vec::new());
    }

    let headers: Vec<&str> = header_line.split(',').collect();
    let mapping: Vec<Option<&FieldSchema<R>>> = headers
        .iter()
        .map(|header| {
            let field = schema.field(header).filter(|f| f.is_writable());
            if field.is_none() {
                trace!(
                    "Skipping column '{header}': no writable field on {}",
                    schema.type_name()
                );
            }
            field
        })
        .collect();

    let mut records = Vec::with_capacity(data_lines.len());
    for (index, line) in data_lines.iter().enumerate() {
        let mut record = R::default();

        // zip stops at the shorter side, so ragged rows never index out of range
        for ((field, header), cell) in mapping.iter().zip(&headers).zip(line.split(',')) {
            let Some(field) = field else {
                continue;
            };
            let typed = csv_string_to_typed_value(cell, field.field_type()).map_err(|source| {
                CsvError::Conversion {
                    line: index + 2,
                    column: header.to_string(),
                    source,
                }
            })?;
            field.set(&mut record, typed.into_value())?;
        }

        records.push(record);
    }

    debug!(
        "Read {} {} records from {} columns",
        records.len(),
        schema.type_name(),
        headers.len()
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use record_core::SchemaError;

    #[derive(Debug, Default, PartialEq)]
    struct Pair {
        a: String,
        b: String,
    }

    impl CsvRecord for Pair {
        fn schema() -> std::result::Result<RecordSchema<Self>, SchemaError> {
            RecordSchema::builder()
                .field("A", |p: &Pair| &p.a, |p: &mut Pair| &mut p.a)
                .field("B", |p: &Pair| &p.b, |p: &mut Pair| &mut p.b)
                .build()
        }
    }

    #[derive(Debug, Default, PartialEq)]
    struct Counter {
        name: String,
        hits: u64,
        ratio: f64,
    }

    impl CsvRecord for Counter {
        fn schema() -> std::result::Result<RecordSchema<Self>, SchemaError> {
            RecordSchema::builder()
                .field("Name", |c: &Counter| &c.name, |c: &mut Counter| &mut c.name)
                .field("Hits", |c: &Counter| &c.hits, |c: &mut Counter| &mut c.hits)
                .read_only("Label", |c: &Counter| format!("{}:{}", c.name, c.hits))
                .field("Ratio", |c: &Counter| &c.ratio, |c: &mut Counter| &mut c.ratio)
                .build()
        }
    }

    fn pair(a: &str, b: &str) -> Pair {
        Pair {
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    #[test]
    fn test_ragged_rows_degrade_gracefully() {
        let records: Vec<Pair> = read_csv_str("A,B\n1\n,2,3\n").unwrap();
        assert_eq!(records, vec![pair("1", ""), pair("", "2")]);
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        assert!(read_csv_str::<Pair>("").unwrap().is_empty());
        assert!(read_csv_str::<Pair>("\r\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_header_only_yields_no_records() {
        assert!(read_csv_str::<Pair>("HeaderOnly").unwrap().is_empty());
        assert!(read_csv_str::<Pair>("A,B\n").unwrap().is_empty());
    }

    #[test]
    fn test_blank_lines_and_crlf_are_skipped() {
        let records: Vec<Pair> = read_csv_str("A,B\r\n\r\nx,y\r\n\n\rz,w\r\n").unwrap();
        assert_eq!(records, vec![pair("x", "y"), pair("z", "w")]);
    }

    #[test]
    fn test_headers_matched_by_name_not_position() {
        let records: Vec<Pair> = read_csv_str("B,A\nfirst,second\n").unwrap();
        assert_eq!(records, vec![pair("second", "first")]);
    }

    #[test]
    fn test_header_match_is_case_sensitive() {
        let records: Vec<Pair> = read_csv_str("a,B\nx,y\n").unwrap();
        assert_eq!(records, vec![pair("", "y")]);
    }

    #[test]
    fn test_unknown_and_read_only_headers_are_skipped() {
        let records: Vec<Counter> =
            read_csv_str("Name,Extra,Label,Hits\nhome,ignored,also ignored,7\n").unwrap();
        assert_eq!(
            records,
            vec![Counter {
                name: "home".to_string(),
                hits: 7,
                ratio: 0.0,
            }]
        );
    }

    #[test]
    fn test_empty_numeric_cell_is_zero() {
        let records: Vec<Counter> = read_csv_str("Name,Hits,Ratio\nidle,,\n").unwrap();
        assert_eq!(records[0].hits, 0);
        assert_eq!(records[0].ratio, 0.0);
    }

    #[test]
    fn test_conversion_error_aborts_read() {
        let err = read_csv_str::<Counter>("Name,Hits\nok,1\nbad,many\nlater,3\n").unwrap_err();
        match err {
            CsvError::Conversion {
                line,
                column,
                source,
            } => {
                assert_eq!(line, 3);
                assert_eq!(column, "Hits");
                assert_eq!(source.value, "many");
            }
            other => panic!("Expected conversion error, got {other:?}"),
        }
    }

    #[test]
    fn test_scalar_targets_are_rejected() {
        assert!(matches!(
            read_csv_str::<i32>("A\n1\n"),
            Err(CsvError::UnsupportedTarget { type_name: "i32" })
        ));
        assert!(matches!(
            read_csv_str::<String>("A\n1\n"),
            Err(CsvError::UnsupportedTarget { .. })
        ));
    }

    #[test]
    fn test_scalar_rejected_before_decoding() {
        let invalid_utf8 = [0xff, 0xfe, 0xfd];
        assert!(matches!(
            read_csv::<f64>(&invalid_utf8),
            Err(CsvError::UnsupportedTarget { .. })
        ));
    }

    #[test]
    fn test_invalid_utf8_is_an_encoding_error() {
        let invalid_utf8 = [b'A', b'\n', 0xff];
        assert!(matches!(
            read_csv::<Pair>(&invalid_utf8),
            Err(CsvError::Encoding(_))
        ));
    }
}
