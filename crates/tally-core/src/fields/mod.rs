//! Declarative field descriptors.
//!
//! Each request type declares its schema as a fixed table of [`Field`]
//! descriptors (associated constants, shared read-only by every request
//! instance). Binding runs the same required/nullable/empty checks for
//! every kind before the kind-specific step, so adding a kind only means
//! implementing [`FieldKind::validate`].

mod kinds;

use std::marker::PhantomData;

use serde_json::{Map, Value};

use crate::error::FieldError;

pub use kinds::{Arguments, BirthDay, Char, ClientIds, Date, Email, GenderCode, Phone, MAX_AGE};

/// String slot with no rule beyond the type check.
pub type CharField = Field<Char>;
/// Opaque JSON-object slot (the envelope's method arguments).
pub type ArgumentsField = Field<Arguments>;
/// String slot matching a simple local@domain pattern.
pub type EmailField = Field<Email>;
/// String-or-integer slot holding an 11-digit number starting with 7.
pub type PhoneField = Field<Phone>;
/// String slot parsing as a `DD.MM.YYYY` date.
pub type DateField = Field<Date>;
/// Date slot whose age relative to today must stay under [`MAX_AGE`].
pub type BirthDayField = Field<BirthDay>;
/// Integer slot holding a gender code.
pub type GenderField = Field<GenderCode>;
/// Non-empty integer-array slot.
pub type ClientIDsField = Field<ClientIds>;

/// Kind-specific validation, run only after the shared checks have passed.
///
/// `raw` is guaranteed present, non-null and (for non-nullable fields)
/// non-empty by the time this is called.
pub trait FieldKind {
    /// The coerced value a successful validation binds.
    type Output;

    fn validate(field: &'static str, raw: &Value) -> Result<Self::Output, FieldError>;
}

/// A named, typed slot in a request schema.
pub struct Field<K> {
    name: &'static str,
    required: bool,
    nullable: bool,
    kind: PhantomData<K>,
}

impl<K: FieldKind> Field<K> {
    pub const fn new(name: &'static str, required: bool, nullable: bool) -> Self {
        Field {
            name,
            required,
            nullable,
            kind: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Bind this field from the raw arguments mapping.
    ///
    /// The check order is part of the contract:
    /// 1. absent key: required fields fail, optional fields bind `None`;
    /// 2. explicit null: nullable fields bind `None` without running the
    ///    kind validation, non-nullable fields fail as empty;
    /// 3. a present but empty value fails on non-nullable fields;
    /// 4. the kind validation runs last and binds the coerced value.
    pub fn bind(&self, arguments: &Map<String, Value>) -> Result<Option<K::Output>, FieldError> {
        let Some(raw) = arguments.get(self.name) else {
            if self.required {
                return Err(FieldError::Missing { field: self.name });
            }
            return Ok(None);
        };
        if raw.is_null() {
            if self.nullable {
                return Ok(None);
            }
            return Err(FieldError::Empty { field: self.name });
        }
        if !self.nullable && is_empty(raw) {
            return Err(FieldError::Empty { field: self.name });
        }
        K::validate(self.name, raw).map(Some)
    }
}

/// Zero-length strings, arrays and objects count as empty; numbers and
/// booleans never do.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// JSON type name used in type-mismatch messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("test arguments are objects")
    }

    #[test]
    fn test_required_field_missing_key() {
        const LOGIN: CharField = CharField::new("login", true, true);
        let err = LOGIN.bind(&args(json!({}))).unwrap_err();
        assert_eq!(err, FieldError::Missing { field: "login" });
    }

    #[test]
    fn test_optional_field_missing_key_binds_none() {
        const ACCOUNT: CharField = CharField::new("account", false, true);
        assert_eq!(ACCOUNT.bind(&args(json!({}))).unwrap(), None);
    }

    #[test]
    fn test_nullable_field_binds_null_without_type_check() {
        // An explicit null never reaches the kind validation, even for a
        // kind that would reject it.
        const GENDER: GenderField = GenderField::new("gender", false, true);
        assert_eq!(GENDER.bind(&args(json!({ "gender": null }))).unwrap(), None);
    }

    #[test]
    fn test_non_nullable_field_rejects_null() {
        const METHOD: CharField = CharField::new("method", true, false);
        let err = METHOD.bind(&args(json!({ "method": null }))).unwrap_err();
        assert_eq!(err, FieldError::Empty { field: "method" });
    }

    #[test]
    fn test_non_nullable_field_rejects_empty_values() {
        const METHOD: CharField = CharField::new("method", true, false);
        let err = METHOD.bind(&args(json!({ "method": "" }))).unwrap_err();
        assert_eq!(err, FieldError::Empty { field: "method" });

        const IDS: ClientIDsField = ClientIDsField::new("client_ids", true, false);
        let err = IDS.bind(&args(json!({ "client_ids": [] }))).unwrap_err();
        assert_eq!(err, FieldError::Empty { field: "client_ids" });
    }

    #[test]
    fn test_nullable_field_accepts_empty_string() {
        const NAME: CharField = CharField::new("first_name", false, true);
        assert_eq!(
            NAME.bind(&args(json!({ "first_name": "" }))).unwrap(),
            Some(String::new())
        );
    }

    #[test]
    fn test_kind_validation_runs_last() {
        const NAME: CharField = CharField::new("first_name", false, true);
        let err = NAME.bind(&args(json!({ "first_name": 7 }))).unwrap_err();
        assert!(matches!(err, FieldError::Invalid { field: "first_name", .. }));
        assert!(err.to_string().contains("expected a string, got number"));
    }

    #[test]
    fn test_bind_coerces_value() {
        const PHONE: PhoneField = PhoneField::new("phone", false, true);
        assert_eq!(
            PHONE.bind(&args(json!({ "phone": 79161234567i64 }))).unwrap(),
            Some("79161234567".to_string())
        );
    }
}
