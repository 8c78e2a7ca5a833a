//! Field kinds: the per-type validation and coercion rules.

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use super::{json_type_name, FieldKind};
use crate::error::FieldError;
use crate::types::Gender;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$")
        .expect("email regex should be valid")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^7[0-9]{10}$").expect("phone regex should be valid"));

/// Maximum accepted age for birthday fields, in full years.
pub const MAX_AGE: i32 = 70;

const DATE_FORMAT: &str = "%d.%m.%Y";

pub struct Char;

impl FieldKind for Char {
    type Output = String;

    fn validate(field: &'static str, raw: &Value) -> Result<String, FieldError> {
        match raw {
            Value::String(s) => Ok(s.clone()),
            other => Err(FieldError::invalid(
                field,
                format!("expected a string, got {}", json_type_name(other)),
            )),
        }
    }
}

pub struct Arguments;

impl FieldKind for Arguments {
    type Output = Map<String, Value>;

    fn validate(field: &'static str, raw: &Value) -> Result<Self::Output, FieldError> {
        match raw {
            Value::Object(map) => Ok(map.clone()),
            other => Err(FieldError::invalid(
                field,
                format!("expected an object, got {}", json_type_name(other)),
            )),
        }
    }
}

pub struct Email;

impl FieldKind for Email {
    type Output = String;

    fn validate(field: &'static str, raw: &Value) -> Result<String, FieldError> {
        let value = Char::validate(field, raw)?;
        if !EMAIL_RE.is_match(&value) {
            return Err(FieldError::invalid(
                field,
                "expected an address of the form local@domain",
            ));
        }
        Ok(value)
    }
}

pub struct Phone;

impl FieldKind for Phone {
    type Output = String;

    /// Accepts a string or an integer; binds the canonical digit string.
    fn validate(field: &'static str, raw: &Value) -> Result<String, FieldError> {
        let digits = match raw {
            Value::String(s) => s.clone(),
            Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
            other => {
                return Err(FieldError::invalid(
                    field,
                    format!(
                        "expected a string or an integer, got {}",
                        json_type_name(other)
                    ),
                ))
            }
        };
        if !PHONE_RE.is_match(&digits) {
            return Err(FieldError::invalid(
                field,
                "expected 11 digits starting with 7",
            ));
        }
        Ok(digits)
    }
}

pub struct Date;

impl FieldKind for Date {
    type Output = NaiveDate;

    fn validate(field: &'static str, raw: &Value) -> Result<NaiveDate, FieldError> {
        let value = Char::validate(field, raw)?;
        NaiveDate::parse_from_str(&value, DATE_FORMAT)
            .map_err(|_| FieldError::invalid(field, "expected a date in DD.MM.YYYY format"))
    }
}

pub struct BirthDay;

impl FieldKind for BirthDay {
    type Output = NaiveDate;

    fn validate(field: &'static str, raw: &Value) -> Result<NaiveDate, FieldError> {
        let born = Date::validate(field, raw)?;
        if full_years(born, Local::now().date_naive()) >= MAX_AGE {
            return Err(FieldError::invalid(
                field,
                format!("age must be less than {MAX_AGE} years"),
            ));
        }
        Ok(born)
    }
}

/// Completed years between `born` and `today`, one less while this year's
/// birthday is still ahead.
fn full_years(born: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        years -= 1;
    }
    years
}

pub struct GenderCode;

impl FieldKind for GenderCode {
    type Output = Gender;

    fn validate(field: &'static str, raw: &Value) -> Result<Gender, FieldError> {
        let code = match raw {
            Value::Number(n) => n.as_i64().ok_or_else(|| {
                FieldError::invalid(field, "expected an integer gender code")
            })?,
            other => {
                return Err(FieldError::invalid(
                    field,
                    format!("expected an integer, got {}", json_type_name(other)),
                ))
            }
        };
        Gender::from_code(code)
            .ok_or_else(|| FieldError::invalid(field, "expected one of 0, 1, 2"))
    }
}

pub struct ClientIds;

impl FieldKind for ClientIds {
    type Output = Vec<i64>;

    fn validate(field: &'static str, raw: &Value) -> Result<Vec<i64>, FieldError> {
        let Value::Array(items) = raw else {
            return Err(FieldError::invalid(
                field,
                format!("expected an array of integers, got {}", json_type_name(raw)),
            ));
        };
        // Non-nullable bindings already reject an empty array; kept here so
        // the kind stands on its own.
        if items.is_empty() {
            return Err(FieldError::invalid(field, "expected at least one client id"));
        }
        items
            .iter()
            .map(|item| {
                item.as_i64().ok_or_else(|| {
                    FieldError::invalid(
                        field,
                        format!(
                            "expected every client id to be an integer, got {}",
                            json_type_name(item)
                        ),
                    )
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_char_accepts_strings_only() {
        assert_eq!(Char::validate("f", &json!("otus")).unwrap(), "otus");
        assert!(Char::validate("f", &json!(1)).is_err());
        assert!(Char::validate("f", &json!(["a"])).is_err());
    }

    #[test]
    fn test_arguments_accepts_objects_only() {
        let bound = Arguments::validate("arguments", &json!({ "phone": "79161234567" })).unwrap();
        assert_eq!(bound.len(), 1);
        assert!(Arguments::validate("arguments", &json!([1, 2])).is_err());
        assert!(Arguments::validate("arguments", &json!("{}")).is_err());
    }

    #[test]
    fn test_email_requires_local_at_domain() {
        assert_eq!(Email::validate("email", &json!("a@b.cd")).unwrap(), "a@b.cd");
        assert_eq!(
            Email::validate("email", &json!("stupnikov@otus.ru")).unwrap(),
            "stupnikov@otus.ru"
        );
        assert!(Email::validate("email", &json!("a-b.cd")).is_err());
        assert!(Email::validate("email", &json!("a@b")).is_err());
        assert!(Email::validate("email", &json!(42)).is_err());
    }

    #[test]
    fn test_phone_accepts_string_and_integer_forms() {
        assert_eq!(
            Phone::validate("phone", &json!("79161234567")).unwrap(),
            "79161234567"
        );
        assert_eq!(
            Phone::validate("phone", &json!(79161234567i64)).unwrap(),
            "79161234567"
        );
    }

    #[test]
    fn test_phone_rejects_wrong_shapes() {
        // wrong leading digit
        assert!(Phone::validate("phone", &json!("89161234567")).is_err());
        // 10 digits
        assert!(Phone::validate("phone", &json!("7916123456")).is_err());
        // 12 digits
        assert!(Phone::validate("phone", &json!("791612345678")).is_err());
        // non-digit characters
        assert!(Phone::validate("phone", &json!("7916123456a")).is_err());
        // floats are not phone numbers
        assert!(Phone::validate("phone", &json!(7916123456.7)).is_err());
        assert!(Phone::validate("phone", &json!(true)).is_err());
    }

    #[test]
    fn test_date_parses_dotted_format_only() {
        let parsed = Date::validate("date", &json!("01.01.2000")).unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date"));
        assert!(Date::validate("date", &json!("2000-01-01")).is_err());
        assert!(Date::validate("date", &json!("31.02.2000")).is_err());
        assert!(Date::validate("date", &json!(20000101)).is_err());
    }

    #[test]
    fn test_full_years_tie_break() {
        let born = NaiveDate::from_ymd_opt(2000, 6, 15).expect("valid date");
        let day_before = NaiveDate::from_ymd_opt(2070, 6, 14).expect("valid date");
        let birthday = NaiveDate::from_ymd_opt(2070, 6, 15).expect("valid date");
        assert_eq!(full_years(born, day_before), 69);
        assert_eq!(full_years(born, birthday), 70);
    }

    fn years_ago(today: NaiveDate, years: i32) -> NaiveDate {
        today
            .with_year(today.year() - years)
            // Feb 29 with no leap target year
            .unwrap_or_else(|| {
                NaiveDate::from_ymd_opt(today.year() - years, 2, 28).expect("valid date")
            })
    }

    #[test]
    fn test_birthday_age_boundary() {
        let today = Local::now().date_naive();
        let under = years_ago(today, MAX_AGE - 1).format("%d.%m.%Y").to_string();
        let over = years_ago(today, MAX_AGE).format("%d.%m.%Y").to_string();
        assert!(BirthDay::validate("birthday", &json!(under)).is_ok());
        assert!(BirthDay::validate("birthday", &json!(over)).is_err());
    }

    #[test]
    fn test_birthday_keeps_date_format_rule() {
        assert!(BirthDay::validate("birthday", &json!("2000-01-01")).is_err());
    }

    #[test]
    fn test_gender_code_range() {
        assert_eq!(GenderCode::validate("gender", &json!(0)).unwrap(), Gender::Unknown);
        assert_eq!(GenderCode::validate("gender", &json!(1)).unwrap(), Gender::Male);
        assert_eq!(GenderCode::validate("gender", &json!(2)).unwrap(), Gender::Female);
        assert!(GenderCode::validate("gender", &json!(3)).is_err());
        assert!(GenderCode::validate("gender", &json!(-1)).is_err());
        assert!(GenderCode::validate("gender", &json!("1")).is_err());
        assert!(GenderCode::validate("gender", &json!(1.5)).is_err());
    }

    #[test]
    fn test_client_ids_integer_array() {
        assert_eq!(
            ClientIds::validate("client_ids", &json!([1, 2, 3])).unwrap(),
            vec![1, 2, 3]
        );
        assert!(ClientIds::validate("client_ids", &json!([])).is_err());
        assert!(ClientIds::validate("client_ids", &json!([1, "2"])).is_err());
        assert!(ClientIds::validate("client_ids", &json!([1.5])).is_err());
        assert!(ClientIds::validate("client_ids", &json!({ "ids": [1] })).is_err());
    }
}
