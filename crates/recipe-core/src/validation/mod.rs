//! Field Validation
//!
//! Pure checks over a form-backing object snapshot. Each field reports at
//! most one error (the first rule it fails), and errors come out in form
//! order so the page can focus the first offending input.
//!
//! The rules mirror the backend's; a rule that drifts from the server
//! misleads the user about why a submit failed.

mod credentials;
mod email;
mod input;
mod recipe;

use std::fmt;

use serde::{Serialize, Serializer};

pub use email::is_valid_email;
pub use input::{normalize_email, normalize_number, InputKind};
pub use recipe::{MAX_INGREDIENTS, MAX_NAME_LEN, MAX_STEPS, MAX_TAGS};
pub use credentials::{MAX_USERNAME_LEN, MIN_PASSWORD_LEN};

/// Form field an error is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Username,
    Email,
    Password,
    VerifyPassword,
    Name,
    Ingredients,
    Steps,
    Tags,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::VerifyPassword => "verifyPassword",
            Field::Name => "name",
            Field::Ingredients => "ingredients",
            Field::Steps => "steps",
            Field::Tags => "tags",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rule a field broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    Required,
    TooLong { max: usize },
    ContainsSpace,
    InvalidEmail,
    TooShort { min: usize },
    Mismatch,
    TooMany { max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub violation: Violation,
}

impl ValidationError {
    pub fn new(field: Field, violation: Violation) -> Self {
        Self { field, violation }
    }

    /// User-facing text
    pub fn message(&self) -> String {
        match (self.field, self.violation) {
            (_, Violation::Required) => "You must provide a value!".to_string(),
            (Field::Username, Violation::TooLong { max }) => {
                format!("Usernames have a maximum length of {} characters.", max)
            }
            (Field::Name, Violation::TooLong { max }) => {
                format!("Recipe names have a maximum length of {} bytes.", max)
            }
            (_, Violation::TooLong { max }) => format!("Must be at most {} characters.", max),
            (_, Violation::ContainsSpace) => "Usernames cannot have spaces!".to_string(),
            (_, Violation::InvalidEmail) => "You must provide a valid email!".to_string(),
            (_, Violation::TooShort { min }) => {
                format!("Your password must be at least {} characters!", min)
            }
            (_, Violation::Mismatch) => "The passwords must match!".to_string(),
            (_, Violation::TooMany { max }) => format!("No more than {} entries allowed.", max),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

/// Wire shape `{ "field": ..., "message": ... }`
impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ValidationError", 2)?;
        state.serialize_field("field", self.field.as_str())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

/// Objects that can be checked before submit
pub trait Validate {
    /// All field errors, in form order; empty means "ok to submit"
    fn validate(&self) -> Vec<ValidationError>;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Field the page should focus after a failed submit
pub fn first_invalid(errors: &[ValidationError]) -> Option<Field> {
    errors.first().map(|e| e.field)
}

/// The error shown under one input, if any
pub fn error_for(errors: &[ValidationError], field: Field) -> Option<&ValidationError> {
    errors.iter().find(|e| e.field == field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ValidationError::new(Field::Username, Violation::TooLong { max: 50 });
        assert_eq!(
            err.message(),
            "Usernames have a maximum length of 50 characters."
        );
        let err = ValidationError::new(Field::VerifyPassword, Violation::Mismatch);
        assert_eq!(err.to_string(), "verifyPassword: The passwords must match!");
    }

    #[test]
    fn test_serializes_field_and_message() {
        let err = ValidationError::new(Field::Email, Violation::Required);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["field"], "email");
        assert_eq!(json["message"], "You must provide a value!");
    }

    #[test]
    fn test_error_lookup() {
        let errors = vec![
            ValidationError::new(Field::Username, Violation::ContainsSpace),
            ValidationError::new(Field::Email, Violation::InvalidEmail),
        ];
        assert_eq!(first_invalid(&errors), Some(Field::Username));
        assert_eq!(
            error_for(&errors, Field::Email).map(|e| e.violation),
            Some(Violation::InvalidEmail)
        );
        assert!(error_for(&errors, Field::Password).is_none());
        assert_eq!(first_invalid(&[]), None);
    }
}
