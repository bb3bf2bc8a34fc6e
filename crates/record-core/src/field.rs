//! Mapping from Rust field types to conversion strategies.
//!
//! A record field can be registered in a [`RecordSchema`](crate::RecordSchema)
//! only if its type implements [`CsvField`]. The built-in implementations
//! cover the primitive numbers, `bool`, `char`, `String`, `Vec<u8>`, the
//! chrono date/time types, `Uuid`, and `Option<T>` of any of them.

use crate::schema::SchemaError;
use crate::types::UniversalType;
use crate::values::UniversalValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

/// A Rust type that can be stored in a CSV cell.
///
/// `from_value` receives `UniversalValue::Null` for an empty cell and must
/// return the type's zero value in that case (or `None` for `Option<T>`).
///
/// # Example
///
/// Enumerations implement the trait by hand:
///
/// ```rust
/// use record_core::{CsvField, SchemaError, UniversalType, UniversalValue};
///
/// #[derive(Debug, Default, PartialEq)]
/// enum Status {
///     #[default]
///     Active,
///     Inactive,
/// }
///
/// impl CsvField for Status {
///     fn universal_type() -> UniversalType {
///         UniversalType::enumeration(["Active", "Inactive"])
///     }
///
///     fn to_value(&self) -> UniversalValue {
///         let name = match self {
///             Status::Active => "Active",
///             Status::Inactive => "Inactive",
///         };
///         UniversalValue::Enum(name.to_string())
///     }
///
///     fn from_value(value: UniversalValue) -> Result<Self, SchemaError> {
///         match value.as_str() {
///             None if value.is_null() => Ok(Status::default()),
///             Some("Active") => Ok(Status::Active),
///             Some("Inactive") => Ok(Status::Inactive),
///             _ => Err(SchemaError::mismatch(&Self::universal_type(), &value)),
///         }
///     }
/// }
/// ```
pub trait CsvField: Sized {
    /// The conversion strategy used for cells of this type.
    fn universal_type() -> UniversalType;

    /// Detach the current value from the record.
    fn to_value(&self) -> UniversalValue;

    /// Build a field value from a converted cell.
    fn from_value(value: UniversalValue) -> Result<Self, SchemaError>;
}

macro_rules! impl_csv_field {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl CsvField for $ty {
                fn universal_type() -> UniversalType {
                    UniversalType::$variant
                }

                fn to_value(&self) -> UniversalValue {
                    UniversalValue::$variant(Clone::clone(self))
                }

                fn from_value(value: UniversalValue) -> Result<Self, SchemaError> {
                    match value {
                        UniversalValue::Null => Ok(<$ty>::default()),
                        UniversalValue::$variant(v) => Ok(v),
                        other => Err(SchemaError::mismatch(&UniversalType::$variant, &other)),
                    }
                }
            }
        )*
    };
}

impl_csv_field! {
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    char => Char,
    Vec<u8> => Bytes,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => LocalDateTime,
    DateTime<Utc> => ZonedDateTime,
    Uuid => Uuid,
}

impl CsvField for String {
    fn universal_type() -> UniversalType {
        UniversalType::Text
    }

    fn to_value(&self) -> UniversalValue {
        UniversalValue::String(self.clone())
    }

    fn from_value(value: UniversalValue) -> Result<Self, SchemaError> {
        match value {
            UniversalValue::Null => Ok(String::new()),
            UniversalValue::String(s) | UniversalValue::Enum(s) => Ok(s),
            other => Err(SchemaError::mismatch(&UniversalType::Text, &other)),
        }
    }
}

impl<T: CsvField> CsvField for Option<T> {
    fn universal_type() -> UniversalType {
        T::universal_type()
    }

    fn to_value(&self) -> UniversalValue {
        match self {
            Some(v) => v.to_value(),
            None => UniversalValue::Null,
        }
    }

    fn from_value(value: UniversalValue) -> Result<Self, SchemaError> {
        match value {
            UniversalValue::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}
