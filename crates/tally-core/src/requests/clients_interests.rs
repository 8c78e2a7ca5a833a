//! Arguments of the `clients_interests` method.

use chrono::NaiveDate;
use serde_json::Map;

use super::MethodRequest;
use crate::error::FieldError;
use crate::fields::{ClientIDsField, DateField};

/// `client_ids` is required and non-empty; `date` is optional.
#[derive(Debug, Clone)]
pub struct ClientsInterestsRequest {
    pub client_ids: Vec<i64>,
    pub date: Option<NaiveDate>,
    pub is_admin: bool,
}

impl ClientsInterestsRequest {
    const CLIENT_IDS: ClientIDsField = ClientIDsField::new("client_ids", true, false);
    const DATE: DateField = DateField::new("date", false, true);

    /// Bind and validate the request from the envelope's arguments.
    pub fn parse(envelope: &MethodRequest) -> Result<Self, FieldError> {
        let empty = Map::new();
        let arguments = envelope.arguments.as_ref().unwrap_or(&empty);
        // The field already rejects an absent or empty list; the guard
        // repeats the check at the request level.
        let client_ids = Self::CLIENT_IDS
            .bind(arguments)?
            .filter(|ids| !ids.is_empty())
            .ok_or(FieldError::Missing {
                field: Self::CLIENT_IDS.name(),
            })?;
        Ok(ClientsInterestsRequest {
            client_ids,
            date: Self::DATE.bind(arguments)?,
            is_admin: envelope.is_admin(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn envelope(arguments: Value) -> MethodRequest {
        MethodRequest::parse(&json!({
            "account": "horns&hoofs",
            "login": "h&f",
            "token": "x",
            "method": "clients_interests",
            "arguments": arguments,
        }))
        .expect("test envelope is well-formed")
    }

    #[test]
    fn test_client_ids_bind() {
        let request = ClientsInterestsRequest::parse(&envelope(json!({
            "client_ids": [1, 2, 3],
        })))
        .unwrap();
        assert_eq!(request.client_ids, vec![1, 2, 3]);
        assert_eq!(request.date, None);
    }

    #[test]
    fn test_optional_date_binds() {
        let request = ClientsInterestsRequest::parse(&envelope(json!({
            "client_ids": [1],
            "date": "19.07.2017",
        })))
        .unwrap();
        assert_eq!(
            request.date,
            Some(NaiveDate::from_ymd_opt(2017, 7, 19).expect("valid date"))
        );
    }

    #[test]
    fn test_empty_client_ids_rejected() {
        let err = ClientsInterestsRequest::parse(&envelope(json!({
            "client_ids": [],
        })))
        .unwrap_err();
        assert_eq!(err, FieldError::Empty { field: "client_ids" });
    }

    #[test]
    fn test_missing_client_ids_rejected() {
        let err = ClientsInterestsRequest::parse(&envelope(json!({}))).unwrap_err();
        assert_eq!(err, FieldError::Missing { field: "client_ids" });
    }

    #[test]
    fn test_null_client_ids_rejected() {
        let err = ClientsInterestsRequest::parse(&envelope(json!({
            "client_ids": null,
        })))
        .unwrap_err();
        assert_eq!(err, FieldError::Empty { field: "client_ids" });
    }

    #[test]
    fn test_non_integer_ids_rejected() {
        let err = ClientsInterestsRequest::parse(&envelope(json!({
            "client_ids": [1, "two"],
        })))
        .unwrap_err();
        assert!(matches!(err, FieldError::Invalid { field: "client_ids", .. }));
    }

    #[test]
    fn test_malformed_date_rejected() {
        let err = ClientsInterestsRequest::parse(&envelope(json!({
            "client_ids": [1],
            "date": "2017-07-19",
        })))
        .unwrap_err();
        assert!(matches!(err, FieldError::Invalid { field: "date", .. }));
    }
}
