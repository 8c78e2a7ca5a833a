//! The signed outer request.

use serde_json::{Map, Value};

use crate::auth::ADMIN_LOGIN;
use crate::error::FieldError;
use crate::fields::{ArgumentsField, CharField};

/// Envelope carrying credentials, the method name and the opaque
/// arguments payload a concrete request is built from.
///
/// `login`, `token` and `arguments` must be present but may be null;
/// `method` must be a non-empty string.
#[derive(Debug, Clone)]
pub struct MethodRequest {
    pub account: Option<String>,
    pub login: Option<String>,
    pub token: Option<String>,
    pub arguments: Option<Map<String, Value>>,
    pub method: String,
}

impl MethodRequest {
    const ACCOUNT: CharField = CharField::new("account", false, true);
    const LOGIN: CharField = CharField::new("login", true, true);
    const TOKEN: CharField = CharField::new("token", true, true);
    const ARGUMENTS: ArgumentsField = ArgumentsField::new("arguments", true, true);
    const METHOD: CharField = CharField::new("method", true, false);

    /// Parse the envelope from the raw request body.
    pub fn parse(body: &Value) -> Result<Self, FieldError> {
        let Some(body) = body.as_object() else {
            return Err(FieldError::invalid("request", "expected a JSON object body"));
        };
        Ok(MethodRequest {
            account: Self::ACCOUNT.bind(body)?,
            login: Self::LOGIN.bind(body)?,
            token: Self::TOKEN.bind(body)?,
            arguments: Self::ARGUMENTS.bind(body)?,
            method: Self::METHOD
                .bind(body)?
                .ok_or(FieldError::Missing { field: "method" })?,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.login.as_deref() == Some(ADMIN_LOGIN)
    }
}
