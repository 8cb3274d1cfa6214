//! Password strength and confirmation.

use serde::Serialize;

use super::{ValidationResult, Validator};
use crate::value::{FieldValue, FormData};

/// Names of the strength rules, in scoring order.
pub const PASSWORD_REQUIREMENTS: [&str; 6] = [
    "At least 8 characters",
    "At least one uppercase letter",
    "At least one lowercase letter",
    "At least one number",
    "At least one special character",
    "No spaces allowed",
];

const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";
const MIN_LENGTH: usize = 8;

/// Coarse bucket for a strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl std::fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        };
        f.pad(name)
    }
}

/// Which strength rules a password satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrength {
    met: [bool; PASSWORD_REQUIREMENTS.len()],
}

impl PasswordStrength {
    /// Number of satisfied rules.
    pub fn satisfied(&self) -> usize {
        self.met.iter().filter(|met| **met).count()
    }

    /// Number of rules.
    pub const fn total(&self) -> usize {
        PASSWORD_REQUIREMENTS.len()
    }

    /// Satisfied share as a percentage in `0.0..=100.0`.
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        self.satisfied() as f64 / self.total() as f64 * 100.0
    }

    /// Under 50% is weak, under 100% medium, otherwise strong.
    pub fn tier(&self) -> StrengthTier {
        let satisfied = self.satisfied();
        if satisfied * 2 < self.total() {
            StrengthTier::Weak
        } else if satisfied < self.total() {
            StrengthTier::Medium
        } else {
            StrengthTier::Strong
        }
    }

    /// Returns whether every rule is satisfied.
    pub fn is_complete(&self) -> bool {
        self.met.iter().all(|met| *met)
    }

    /// Names of the rules not yet satisfied.
    pub fn unmet(&self) -> Vec<&'static str> {
        PASSWORD_REQUIREMENTS
            .iter()
            .zip(self.met)
            .filter(|(_, met)| !met)
            .map(|(name, _)| *name)
            .collect()
    }
}

/// Scores a password against the six strength rules.
pub fn password_strength(password: &str) -> PasswordStrength {
    let long_enough = password
        .split(['\n', '\r', '\u{2028}', '\u{2029}'])
        .any(|line| line.chars().count() >= MIN_LENGTH);

    PasswordStrength {
        met: [
            long_enough,
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_lowercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
            !password.chars().any(char::is_whitespace),
        ],
    }
}

/// Validator that only accepts passwords meeting every strength rule.
///
/// The result carries the strength reading whether or not it passes.
#[derive(Debug, Clone, Default)]
pub struct PasswordValidator;

impl PasswordValidator {
    pub const MESSAGE: &'static str = "Password does not meet all criteria.";

    /// Creates a new PasswordValidator.
    pub const fn new() -> Self {
        Self
    }
}

impl Validator for PasswordValidator {
    fn validate(&self, value: &FieldValue, _form: &FormData) -> ValidationResult {
        let strength = password_strength(value.as_text());
        let result = if strength.is_complete() {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(Self::MESSAGE)
        };
        result.with_strength(strength)
    }
}

/// Validator requiring an exact copy of another field.
#[derive(Debug, Clone)]
pub struct ConfirmPasswordValidator {
    password_field: String,
}

impl ConfirmPasswordValidator {
    pub const MESSAGE: &'static str = "Passwords do not match.";

    /// Creates a validator comparing against `password_field`.
    pub fn new(password_field: impl Into<String>) -> Self {
        Self {
            password_field: password_field.into(),
        }
    }
}

impl Validator for ConfirmPasswordValidator {
    fn validate(&self, value: &FieldValue, form: &FormData) -> ValidationResult {
        if value.as_text() == form.text(&self.password_field) {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(Self::MESSAGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(input: &str) -> ValidationResult {
        PasswordValidator::new().validate(&FieldValue::from(input), &FormData::new())
    }

    #[test]
    fn test_strong_password() {
        let result = check("Abcdef1!");
        assert!(result.is_valid());

        let strength = result.strength().unwrap();
        assert_eq!(strength.satisfied(), 6);
        assert!((strength.percent() - 100.0).abs() < f64::EPSILON);
        assert_eq!(strength.tier(), StrengthTier::Strong);
        assert!(strength.unmet().is_empty());
    }

    #[test]
    fn test_lowercase_only() {
        let result = check("abcdefgh");
        assert_eq!(result.message(), Some(PasswordValidator::MESSAGE));

        let strength = result.strength().unwrap();
        // length, lowercase, no whitespace
        assert_eq!(strength.satisfied(), 3);
        assert!((strength.percent() - 50.0).abs() < f64::EPSILON);
        assert_eq!(strength.tier(), StrengthTier::Medium);
        assert_eq!(
            strength.unmet(),
            vec![
                "At least one uppercase letter",
                "At least one number",
                "At least one special character",
            ]
        );
    }

    #[test]
    fn test_weak_tier() {
        let strength = password_strength("ab cd");
        // lowercase only
        assert_eq!(strength.satisfied(), 1);
        assert_eq!(strength.tier(), StrengthTier::Weak);

        assert_eq!(password_strength("").satisfied(), 1);
        assert_eq!(password_strength("").tier(), StrengthTier::Weak);
    }

    #[test]
    fn test_whitespace_breaks_strong_password() {
        let result = check("Abcdef1! x");
        assert!(!result.is_valid());
        assert_eq!(result.strength().unwrap().unmet(), vec!["No spaces allowed"]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert!(!password_strength("ééé").met[0]);
        assert!(password_strength("éééééééé").met[0]);
        assert!(!password_strength("Abc1!\nxyz").met[0]);
    }

    #[test]
    fn test_confirm_password() {
        let v = ConfirmPasswordValidator::new("password");
        let form = FormData::new().with("password", "Abcdef1!");

        assert!(v.validate(&FieldValue::from("Abcdef1!"), &form).is_valid());

        let result = v.validate(&FieldValue::from("abcdef1!"), &form);
        assert_eq!(result.message(), Some(ConfirmPasswordValidator::MESSAGE));

        let result = v.validate(&FieldValue::from("Abcdef1! "), &form);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_confirm_empty_matches_empty() {
        let v = ConfirmPasswordValidator::new("password");
        assert!(v
            .validate(&FieldValue::from(""), &FormData::new())
            .is_valid());
    }
}
