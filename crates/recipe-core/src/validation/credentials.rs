//! Credentials Rules
//!
//! username: login + newuser. email, verify: newuser. password: login.

use super::email::is_valid_email;
use super::{Field, Validate, ValidationError, Violation};
use crate::domain::{LoginForm, NewUserForm, UserCredentials, UserData};

pub const MAX_USERNAME_LEN: usize = 50;
pub const MIN_PASSWORD_LEN: usize = 6;

fn check_username(value: &str) -> Option<Violation> {
    if value.is_empty() {
        Some(Violation::Required)
    } else if value.chars().count() > MAX_USERNAME_LEN {
        Some(Violation::TooLong {
            max: MAX_USERNAME_LEN,
        })
    } else if value.contains(' ') {
        Some(Violation::ContainsSpace)
    } else {
        None
    }
}

fn check_email(value: &str) -> Option<Violation> {
    if value.is_empty() {
        Some(Violation::Required)
    } else if !is_valid_email(value) {
        Some(Violation::InvalidEmail)
    } else {
        None
    }
}

fn check_password(value: &str) -> Option<Violation> {
    if value.is_empty() {
        Some(Violation::Required)
    } else if value.chars().count() < MIN_PASSWORD_LEN {
        Some(Violation::TooShort {
            min: MIN_PASSWORD_LEN,
        })
    } else {
        None
    }
}

fn check_verify(password: &str, verify: &str) -> Option<Violation> {
    if verify.is_empty() {
        Some(Violation::Required)
    } else if password != verify {
        Some(Violation::Mismatch)
    } else {
        None
    }
}

fn collect(checks: impl IntoIterator<Item = (Field, Option<Violation>)>) -> Vec<ValidationError> {
    checks
        .into_iter()
        .filter_map(|(field, violation)| violation.map(|v| ValidationError::new(field, v)))
        .collect()
}

impl Validate for LoginForm {
    fn validate(&self) -> Vec<ValidationError> {
        collect([
            (Field::Username, check_username(&self.username)),
            (Field::Password, check_password(&self.password)),
        ])
    }
}

impl Validate for NewUserForm {
    fn validate(&self) -> Vec<ValidationError> {
        collect([
            (Field::Username, check_username(&self.username)),
            (Field::Email, check_email(&self.email)),
            (
                Field::VerifyPassword,
                check_verify(&self.password, &self.verify_password),
            ),
        ])
    }
}

impl Validate for UserData {
    fn validate(&self) -> Vec<ValidationError> {
        Vec::new()
    }
}

impl Validate for UserCredentials {
    fn validate(&self) -> Vec<ValidationError> {
        match self {
            UserCredentials::Login(form) => form.validate(),
            UserCredentials::NewUser(form) => form.validate(),
            UserCredentials::ReadOnly(data) => data.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, email: &str, password: &str, verify: &str) -> UserCredentials {
        UserCredentials::NewUser(NewUserForm {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            verify_password: verify.to_string(),
        })
    }

    fn login(username: &str, password: &str) -> UserCredentials {
        UserCredentials::Login(LoginForm {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    fn fields(errors: &[ValidationError]) -> Vec<Field> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_read_only_never_fails() {
        let data = UserCredentials::ReadOnly(UserData {
            username: "has a space".to_string(),
            email: "not-an-email".to_string(),
        });
        assert!(data.validate().is_empty());
        assert!(UserCredentials::ReadOnly(UserData::default()).is_valid());
    }

    #[test]
    fn test_valid_new_user() {
        let creds = new_user("cook", "cook@example.com", "secret1", "secret1");
        assert!(creds.validate().is_empty());
    }

    #[test]
    fn test_blank_new_user_reports_every_required_field() {
        let errors = new_user("", "", "", "").validate();
        assert_eq!(
            fields(&errors),
            vec![Field::Username, Field::Email, Field::VerifyPassword]
        );
        assert!(errors.iter().all(|e| e.violation == Violation::Required));
    }

    #[test]
    fn test_username_with_space_reports_only_space() {
        let errors = new_user("bad user", "cook@example.com", "secret1", "secret1").validate();
        let username_errors: Vec<_> = errors.iter().filter(|e| e.field == Field::Username).collect();
        assert_eq!(username_errors.len(), 1);
        assert_eq!(username_errors[0].violation, Violation::ContainsSpace);
        assert!(username_errors[0].message().contains("spaces"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_username_length_checked_before_spaces() {
        let long = format!("{} x", "a".repeat(MAX_USERNAME_LEN));
        let errors = login(&long, "secret1").validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].violation,
            Violation::TooLong {
                max: MAX_USERNAME_LEN
            }
        );

        let exact = "a".repeat(MAX_USERNAME_LEN);
        assert!(login(&exact, "secret1").validate().is_empty());
    }

    #[test]
    fn test_username_length_counts_characters() {
        let name = "é".repeat(MAX_USERNAME_LEN);
        assert!(login(&name, "secret1").validate().is_empty());
    }

    #[test]
    fn test_mismatched_verify() {
        let errors = new_user("cook", "cook@example.com", "secret1", "secret2").validate();
        assert_eq!(
            errors,
            vec![ValidationError::new(Field::VerifyPassword, Violation::Mismatch)]
        );
    }

    #[test]
    fn test_invalid_email() {
        let errors = new_user("cook", "cook@", "secret1", "secret1").validate();
        assert_eq!(
            errors,
            vec![ValidationError::new(Field::Email, Violation::InvalidEmail)]
        );
    }

    #[test]
    fn test_login_password_rules() {
        let errors = login("cook", "").validate();
        assert_eq!(
            errors,
            vec![ValidationError::new(Field::Password, Violation::Required)]
        );

        let errors = login("cook", "12345").validate();
        assert_eq!(
            errors,
            vec![ValidationError::new(
                Field::Password,
                Violation::TooShort {
                    min: MIN_PASSWORD_LEN
                }
            )]
        );

        assert!(login("cook", "123456").validate().is_empty());
    }

    #[test]
    fn test_login_ignores_email_and_verify() {
        // LoginForm carries neither field; nothing about them can surface
        let errors = login("", "").validate();
        assert_eq!(fields(&errors), vec![Field::Username, Field::Password]);
    }
}
