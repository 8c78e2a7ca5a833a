//! Arguments of the `online_score` method.

use chrono::NaiveDate;
use serde_json::Map;

use super::MethodRequest;
use crate::backend::ScoreQuery;
use crate::error::FieldError;
use crate::fields::{BirthDayField, CharField, EmailField, GenderField, PhoneField};
use crate::types::Gender;

/// Every field is individually optional; at least one of the pairs
/// (phone, email), (first_name, last_name), (gender, birthday) must be
/// fully supplied.
#[derive(Debug, Clone)]
pub struct OnlineScoreRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub is_admin: bool,
}

impl OnlineScoreRequest {
    const FIRST_NAME: CharField = CharField::new("first_name", false, true);
    const LAST_NAME: CharField = CharField::new("last_name", false, true);
    const EMAIL: EmailField = EmailField::new("email", false, true);
    const PHONE: PhoneField = PhoneField::new("phone", false, true);
    const BIRTHDAY: BirthDayField = BirthDayField::new("birthday", false, true);
    const GENDER: GenderField = GenderField::new("gender", false, true);

    /// Bind and validate the request from the envelope's arguments.
    pub fn parse(envelope: &MethodRequest) -> Result<Self, FieldError> {
        let empty = Map::new();
        let arguments = envelope.arguments.as_ref().unwrap_or(&empty);
        let request = OnlineScoreRequest {
            first_name: Self::FIRST_NAME.bind(arguments)?,
            last_name: Self::LAST_NAME.bind(arguments)?,
            email: Self::EMAIL.bind(arguments)?,
            phone: Self::PHONE.bind(arguments)?,
            birthday: Self::BIRTHDAY.bind(arguments)?,
            gender: Self::GENDER.bind(arguments)?,
            is_admin: envelope.is_admin(),
        };
        if !request.has_required_pair() {
            return Err(FieldError::constraint(
                "at least one pair of (phone, email), (first_name, last_name), \
                 (gender, birthday) must be supplied",
            ));
        }
        Ok(request)
    }

    fn has_required_pair(&self) -> bool {
        (self.phone.is_some() && self.email.is_some())
            || (self.first_name.is_some() && self.last_name.is_some())
            || (self.gender.is_some() && self.birthday.is_some())
    }

    /// Names of the fields the caller actually supplied, in declaration
    /// order.
    pub fn supplied(&self) -> Vec<&'static str> {
        let mut supplied = Vec::new();
        if self.first_name.is_some() {
            supplied.push(Self::FIRST_NAME.name());
        }
        if self.last_name.is_some() {
            supplied.push(Self::LAST_NAME.name());
        }
        if self.email.is_some() {
            supplied.push(Self::EMAIL.name());
        }
        if self.phone.is_some() {
            supplied.push(Self::PHONE.name());
        }
        if self.birthday.is_some() {
            supplied.push(Self::BIRTHDAY.name());
        }
        if self.gender.is_some() {
            supplied.push(Self::GENDER.name());
        }
        supplied
    }

    /// Borrowed view handed to the scoring collaborator.
    pub fn query(&self) -> ScoreQuery<'_> {
        ScoreQuery {
            phone: self.phone.as_deref(),
            email: self.email.as_deref(),
            birthday: self.birthday,
            gender: self.gender,
            first_name: self.first_name.as_deref(),
            last_name: self.last_name.as_deref(),
        }
    }
}
