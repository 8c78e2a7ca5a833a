//! Error types and status codes for the tally core.

use thiserror::Error;

/// Validation failure raised while binding request fields.
///
/// Request-level invariants reuse this type (the `Constraint` variant), so
/// callers cannot tell field-level from request-level failures apart except
/// by message text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A required field had no key in the arguments mapping
    #[error("required field missing: {field}")]
    Missing { field: &'static str },

    /// A non-nullable field was supplied null or an empty value
    #[error("field '{field}' must not be empty")]
    Empty { field: &'static str },

    /// The supplied value failed the field kind's type or format rule
    #[error("invalid value for field '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },

    /// A whole-request invariant was not satisfied
    #[error("{message}")]
    Constraint { message: String },
}

impl FieldError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        FieldError::Invalid {
            field,
            reason: reason.into(),
        }
    }

    pub fn constraint(message: impl Into<String>) -> Self {
        FieldError::Constraint {
            message: message.into(),
        }
    }
}

/// Failure reported by the scoring collaborator.
///
/// Never shown to callers verbatim; the dispatcher downgrades it to
/// [`ResponseCode::InternalError`] with the fixed phrase.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("backend failure: {0}")]
    Internal(String),
}

/// The closed set of status codes a reply can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Ok,
    BadRequest,
    Forbidden,
    NotFound,
    InvalidRequest,
    InternalError,
}

impl ResponseCode {
    pub fn as_u16(self) -> u16 {
        match self {
            ResponseCode::Ok => 200,
            ResponseCode::BadRequest => 400,
            ResponseCode::Forbidden => 403,
            ResponseCode::NotFound => 404,
            ResponseCode::InvalidRequest => 422,
            ResponseCode::InternalError => 500,
        }
    }

    /// The fixed phrase reported when no more specific message applies.
    pub fn reason(self) -> &'static str {
        match self {
            ResponseCode::Ok => "OK",
            ResponseCode::BadRequest => "Bad Request",
            ResponseCode::Forbidden => "Forbidden",
            ResponseCode::NotFound => "Not Found",
            ResponseCode::InvalidRequest => "Invalid Request",
            ResponseCode::InternalError => "Internal Server Error",
        }
    }

    pub fn is_error(self) -> bool {
        !matches!(self, ResponseCode::Ok)
    }
}
