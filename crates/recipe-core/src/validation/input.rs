//! Input Normalization
//!
//! What a text box writes back into the form object, per input kind.

use std::str::FromStr;

use crate::error::FormError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InputKind {
    #[default]
    Text,
    Number,
    Email,
    Password,
}

impl InputKind {
    /// HTML `type` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Number => "number",
            InputKind::Email => "email",
            InputKind::Password => "password",
        }
    }

    /// Raw input value as it should be stored
    pub fn normalize(&self, raw: &str) -> String {
        match self {
            InputKind::Number => normalize_number(raw)
                .map(|n| n.to_string())
                .unwrap_or_default(),
            InputKind::Email => normalize_email(raw),
            InputKind::Text | InputKind::Password => raw.to_string(),
        }
    }
}

impl FromStr for InputKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(InputKind::Text),
            "number" => Ok(InputKind::Number),
            "email" => Ok(InputKind::Email),
            "password" => Ok(InputKind::Password),
            other => Err(FormError::UnsupportedInputKind(other.to_string())),
        }
    }
}

/// Keep only digits; nothing left (or overflow) means "unset".
pub fn normalize_number(raw: &str) -> Option<u32> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

pub fn normalize_email(raw: &str) -> String {
    raw.replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_strips_non_digits() {
        assert_eq!(normalize_number("4"), Some(4));
        assert_eq!(normalize_number(" 1a2 "), Some(12));
        assert_eq!(normalize_number("-3"), Some(3));
        assert_eq!(normalize_number("abc"), None);
        assert_eq!(normalize_number(""), None);
        assert_eq!(normalize_number("99999999999"), None);
    }

    #[test]
    fn test_email_strips_spaces() {
        assert_eq!(normalize_email(" cook @example.com "), "cook@example.com");
        assert_eq!(InputKind::Email.normalize("a b@c.de"), "ab@c.de");
    }

    #[test]
    fn test_password_is_untouched() {
        assert_eq!(InputKind::Password.normalize(" pass word "), " pass word ");
    }

    #[test]
    fn test_unsupported_kind_is_rejected() {
        assert_eq!("number".parse::<InputKind>().unwrap(), InputKind::Number);
        assert_eq!(
            "checkbox".parse::<InputKind>().unwrap_err(),
            FormError::UnsupportedInputKind("checkbox".to_string())
        );
    }
}
