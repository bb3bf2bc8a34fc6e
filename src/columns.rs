//! Column resolution.
//!
//! Decides which fields take part in a write, and in what order.

use record_core::RecordSchema;

/// Resolve the ordered column list for a write.
///
/// Explicit columns are returned verbatim, without checking them against the
/// schema; names with no matching field become empty cells in the writer.
/// Without explicit columns every registered field is used, in registration
/// order.
pub fn resolve_columns<R>(schema: &RecordSchema<R>, explicit: Option<&[String]>) -> Vec<String> {
    match explicit {
        Some(columns) => columns.to_vec(),
        None => schema.field_names().map(str::to_string).collect(),
    }
}
