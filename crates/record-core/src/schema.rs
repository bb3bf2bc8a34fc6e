//! Record descriptors for the record-csv framework.
//!
//! A [`RecordSchema`] is the explicit replacement for runtime reflection: an
//! ordered table of field descriptors, each carrying a name, a conversion
//! strategy, and optional accessor/mutator closures.
//!
//! ## Field kinds
//!
//! - `field` - readable and writable, backed by a struct member
//! - `read_only` - computed on write, ignored on read
//! - `write_only` - assigned on read, written as an empty cell
//!
//! Registration order is the default column order.

use crate::field::CsvField;
use crate::types::UniversalType;
use crate::values::UniversalValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Two fields were registered under the same name
    #[error("Field '{field}' is registered more than once on {record}")]
    DuplicateField { record: &'static str, field: String },

    /// A setter received a value produced by a different strategy
    #[error("Expected a {expected} value, found {found}")]
    TypeMismatch {
        expected: String,
        found: &'static str,
    },

    /// Attempt to assign a field that has no setter
    #[error("Field '{0}' is not writable")]
    NotWritable(String),
}

impl SchemaError {
    /// Build a `TypeMismatch` from the expected strategy and the offending value.
    pub fn mismatch(expected: &UniversalType, found: &UniversalValue) -> Self {
        Self::TypeMismatch {
            expected: expected.to_string(),
            found: found.kind(),
        }
    }
}

// ============================================================================
// Field Descriptors
// ============================================================================

type Getter<R> = Box<dyn Fn(&R) -> UniversalValue + Send + Sync>;
type Setter<R> = Box<dyn Fn(&mut R, UniversalValue) -> Result<(), SchemaError> + Send + Sync>;

/// Descriptor for a single field of record type `R`.
pub struct FieldSchema<R> {
    name: String,
    field_type: UniversalType,
    getter: Option<Getter<R>>,
    setter: Option<Setter<R>>,
}

impl<R> FieldSchema<R> {
    /// Field name as matched against columns and headers.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Conversion strategy for this field.
    pub fn field_type(&self) -> &UniversalType {
        &self.field_type
    }

    pub fn is_readable(&self) -> bool {
        self.getter.is_some()
    }

    pub fn is_writable(&self) -> bool {
        self.setter.is_some()
    }

    /// Read the field's current value, or `None` for a write-only field.
    pub fn get(&self, record: &R) -> Option<UniversalValue> {
        self.getter.as_ref().map(|get| get(record))
    }

    /// Assign a converted value to the field.
    pub fn set(&self, record: &mut R, value: UniversalValue) -> Result<(), SchemaError> {
        match &self.setter {
            Some(set) => set(record, value),
            None => Err(SchemaError::NotWritable(self.name.clone())),
        }
    }
}

impl<R> fmt::Debug for FieldSchema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSchema")
            .field("name", &self.name)
            .field("field_type", &self.field_type)
            .field("readable", &self.is_readable())
            .field("writable", &self.is_writable())
            .finish()
    }
}

// ============================================================================
// Record Descriptors
// ============================================================================

/// Whether a schema describes a record or a bare scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// A record with named fields, mutated in place after default construction
    Record,

    /// A primitive value (number, bool, string, ...) with no named fields
    Scalar,
}

/// Ordered field descriptors for record type `R`.
#[derive(Debug)]
pub struct RecordSchema<R> {
    type_name: &'static str,
    kind: RecordKind,
    fields: Vec<FieldSchema<R>>,
}

impl<R: 'static> RecordSchema<R> {
    /// Start registering fields for `R`.
    pub fn builder() -> RecordSchemaBuilder<R> {
        RecordSchemaBuilder { fields: Vec::new() }
    }
}

impl<R> RecordSchema<R> {
    /// Schema of a scalar type. It has no fields and cannot be read into.
    pub fn scalar() -> Self {
        Self {
            type_name: std::any::type_name::<R>(),
            kind: RecordKind::Scalar,
            fields: Vec::new(),
        }
    }

    /// Rust type name of `R`.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn is_scalar(&self) -> bool {
        self.kind == RecordKind::Scalar
    }

    /// All fields in registration order.
    pub fn fields(&self) -> &[FieldSchema<R>] {
        &self.fields
    }

    /// Find a field by exact, case-sensitive name.
    pub fn field(&self, name: &str) -> Option<&FieldSchema<R>> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in registration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder for `RecordSchema`.
pub struct RecordSchemaBuilder<R> {
    fields: Vec<FieldSchema<R>>,
}

impl<R: 'static> RecordSchemaBuilder<R> {
    /// Register a readable and writable field backed by a struct member.
    pub fn field<T>(
        mut self,
        name: impl Into<String>,
        get: fn(&R) -> &T,
        get_mut: fn(&mut R) -> &mut T,
    ) -> Self
    where
        T: CsvField + 'static,
    {
        self.fields.push(FieldSchema {
            name: name.into(),
            field_type: T::universal_type(),
            getter: Some(Box::new(move |record: &R| get(record).to_value())),
            setter: Some(Box::new(move |record: &mut R, value: UniversalValue| {
                *get_mut(record) = T::from_value(value)?;
                Ok(())
            })),
        });
        self
    }

    /// Register a computed field that is written but never read back.
    pub fn read_only<T>(mut self, name: impl Into<String>, get: fn(&R) -> T) -> Self
    where
        T: CsvField + 'static,
    {
        self.fields.push(FieldSchema {
            name: name.into(),
            field_type: T::universal_type(),
            getter: Some(Box::new(move |record: &R| get(record).to_value())),
            setter: None,
        });
        self
    }

    /// Register a field that is assigned on read and written as an empty cell.
    pub fn write_only<T>(mut self, name: impl Into<String>, set: fn(&mut R, T)) -> Self
    where
        T: CsvField + 'static,
    {
        self.fields.push(FieldSchema {
            name: name.into(),
            field_type: T::universal_type(),
            getter: None,
            setter: Some(Box::new(move |record: &mut R, value: UniversalValue| {
                set(record, T::from_value(value)?);
                Ok(())
            })),
        });
        self
    }

    /// Finish registration. Field names must be unique.
    pub fn build(self) -> Result<RecordSchema<R>, SchemaError> {
        let type_name = std::any::type_name::<R>();
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    record: type_name,
                    field: field.name.clone(),
                });
            }
        }

        Ok(RecordSchema {
            type_name,
            kind: RecordKind::Record,
            fields: self.fields,
        })
    }
}

// ============================================================================
// Record Trait
// ============================================================================

/// A type that can be written to and read from CSV.
///
/// Readers construct each record with `Default::default()` and then assign
/// matched fields one by one.
pub trait CsvRecord: Default + Sized + 'static {
    /// Describe the fields of this type, in column order.
    fn schema() -> Result<RecordSchema<Self>, SchemaError>;
}

macro_rules! impl_scalar_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CsvRecord for $ty {
                fn schema() -> Result<RecordSchema<Self>, SchemaError> {
                    Ok(RecordSchema::scalar())
                }
            }
        )*
    };
}

impl_scalar_record! {
    bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, char, String,
    NaiveDate, NaiveTime, NaiveDateTime, DateTime<Utc>, Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Account {
        id: i64,
        owner: String,
        balance: f64,
        audit: Vec<String>,
    }

    impl CsvRecord for Account {
        fn schema() -> Result<RecordSchema<Self>, SchemaError> {
            RecordSchema::builder()
                .field("Id", |a: &Account| &a.id, |a: &mut Account| &mut a.id)
                .field("Owner", |a: &Account| &a.owner, |a: &mut Account| &mut a.owner)
                .read_only("Overdrawn", |a: &Account| a.balance < 0.0)
                .write_only("Note", |a: &mut Account, note: String| a.audit.push(note))
                .build()
        }
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let schema = Account::schema().unwrap();
        assert_eq!(
            schema.field_names().collect::<Vec<_>>(),
            vec!["Id", "Owner", "Overdrawn", "Note"]
        );
        assert_eq!(schema.len(), 4);
        assert_eq!(schema.kind(), RecordKind::Record);
        assert!(schema.type_name().ends_with("Account"));
    }

    #[test]
    fn test_field_lookup_is_case_sensitive() {
        let schema = Account::schema().unwrap();
        assert!(schema.field("Owner").is_some());
        assert!(schema.field("owner").is_none());
        assert_eq!(schema.field("Id").unwrap().field_type(), &UniversalType::Int64);
    }

    #[test]
    fn test_accessors() {
        let schema = Account::schema().unwrap();
        let mut account = Account::default();

        schema
            .field("Owner")
            .unwrap()
            .set(&mut account, UniversalValue::String("Ada".to_string()))
            .unwrap();
        schema
            .field("Note")
            .unwrap()
            .set(&mut account, UniversalValue::String("opened".to_string()))
            .unwrap();

        assert_eq!(account.owner, "Ada");
        assert_eq!(account.audit, vec!["opened".to_string()]);
        assert_eq!(
            schema.field("Overdrawn").unwrap().get(&account),
            Some(UniversalValue::Bool(false))
        );
        assert_eq!(schema.field("Note").unwrap().get(&account), None);
    }

    #[test]
    fn test_read_only_field_rejects_assignment() {
        let schema = Account::schema().unwrap();
        let field = schema.field("Overdrawn").unwrap();
        assert!(field.is_readable());
        assert!(!field.is_writable());

        let err = field
            .set(&mut Account::default(), UniversalValue::Bool(true))
            .unwrap_err();
        assert!(matches!(err, SchemaError::NotWritable(ref name) if name == "Overdrawn"));
    }

    #[test]
    fn test_duplicate_field_is_rejected() {
        let result = RecordSchema::<Account>::builder()
            .field("Id", |a: &Account| &a.id, |a: &mut Account| &mut a.id)
            .field("Id", |a: &Account| &a.owner, |a: &mut Account| &mut a.owner)
            .build();

        let err = result.unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField { ref field, .. } if field == "Id"));
    }

    #[test]
    fn test_scalar_schemas() {
        let schema = <i32 as CsvRecord>::schema().unwrap();
        assert!(schema.is_scalar());
        assert!(schema.is_empty());
        assert_eq!(schema.type_name(), "i32");

        assert!(<String as CsvRecord>::schema().unwrap().is_scalar());
    }
}
