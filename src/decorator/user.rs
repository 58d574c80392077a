use super::{DecoratorError, Profile, Value};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The date every [`User`] is born on unless told otherwise.
pub const BIRTH_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1989, 9, 10) {
    Some(date) => date,
    None => panic!("1989-09-10 is a valid calendar date"),
};

/// The subject at the bottom of every decorator chain.
///
/// # Delegation
/// This struct implements [`Profile`] directly. Decorators wrapping it reach its
/// data through [`Profile`] too, so they cannot tell a bare `User` from another
/// decorator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub first_name: Option<String>,
    pub last_name: String,
    pub born_on: NaiveDate,
}

impl User {
    /// Creates a new User born on [`BIRTH_DATE`].
    ///
    /// # Arguments
    /// * `first_name` - Given name(s); only the first token is used by `full_name`
    /// * `last_name` - Family name
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: last_name.into(),
            born_on: BIRTH_DATE,
        }
    }

    /// Creates a User whose first name is absent.
    pub fn without_first_name(last_name: impl Into<String>) -> Self {
        Self {
            first_name: None,
            last_name: last_name.into(),
            born_on: BIRTH_DATE,
        }
    }

    /// Moves the birth date.
    pub fn born(mut self, born_on: NaiveDate) -> Self {
        self.born_on = born_on;
        self
    }
}

impl Profile for User {
    fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn born_on(&self) -> NaiveDate {
        self.born_on
    }

    fn subject(&self) -> &User {
        self
    }

    fn respond_to(&self, operation: &str) -> Result<Value, DecoratorError> {
        let value = match operation {
            "first_name" => self
                .first_name
                .clone()
                .map(Value::Text)
                .unwrap_or(Value::Nil),
            "last_name" => Value::Text(self.last_name.clone()),
            "born_on" => Value::Date(self.born_on),
            _ => {
                debug!(operation, "Reached the subject without a match");
                return Err(DecoratorError::UnsupportedOperation(operation.to_string()));
            }
        };
        debug!(operation, "Resolved on subject");
        Ok(value)
    }
}
