//! Recipe Rules
//!
//! Capacities match the backend's fixed-size recipe record. The name is a
//! NUL-terminated byte buffer, so its limit counts UTF-8 bytes. The note is
//! stored unbounded and has no rule.

use super::{Field, Validate, ValidationError, Violation};
use crate::domain::Recipe;

/// Bytes available in the 128-byte name buffer after the terminator
pub const MAX_NAME_LEN: usize = 127;
pub const MAX_INGREDIENTS: usize = 128;
pub const MAX_STEPS: usize = 128;
pub const MAX_TAGS: usize = 64;

fn check_list(items: &[String], max: usize) -> Option<Violation> {
    (items.len() > max).then_some(Violation::TooMany { max })
}

impl Validate for Recipe {
    fn validate(&self) -> Vec<ValidationError> {
        let name = if self.name.trim().is_empty() {
            Some(Violation::Required)
        } else if self.name.len() > MAX_NAME_LEN {
            Some(Violation::TooLong { max: MAX_NAME_LEN })
        } else {
            None
        };

        [
            (Field::Name, name),
            (Field::Ingredients, check_list(&self.ingredients, MAX_INGREDIENTS)),
            (Field::Steps, check_list(&self.steps, MAX_STEPS)),
            (Field::Tags, check_list(&self.tags, MAX_TAGS)),
        ]
        .into_iter()
        .filter_map(|(field, violation)| violation.map(|v| ValidationError::new(field, v)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Recipe {
        Recipe {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_name_required() {
        let errors = named("   ").validate();
        assert_eq!(
            errors,
            vec![ValidationError::new(Field::Name, Violation::Required)]
        );
        assert!(named("Soup").is_valid());
    }

    #[test]
    fn test_capacity_limits() {
        let mut recipe = named("Soup");
        recipe.tags = vec![String::new(); MAX_TAGS + 1];
        let errors = recipe.validate();
        assert_eq!(
            errors,
            vec![ValidationError::new(Field::Tags, Violation::TooMany { max: MAX_TAGS })]
        );
    }

    #[test]
    fn test_long_note_is_accepted() {
        let mut recipe = named("Soup");
        recipe.note = "x".repeat(300);
        assert!(recipe.validate().is_empty());
    }

    #[test]
    fn test_name_limit_counts_bytes() {
        assert!(named(&"a".repeat(MAX_NAME_LEN)).is_valid());
        assert!(!named(&"a".repeat(MAX_NAME_LEN + 1)).is_valid());

        // 100 chars but 200 bytes
        let errors = named(&"é".repeat(100)).validate();
        assert_eq!(
            errors,
            vec![ValidationError::new(Field::Name, Violation::TooLong { max: MAX_NAME_LEN })]
        );
        assert_eq!(errors[0].message(), "Recipe names have a maximum length of 127 bytes.");
    }
}
