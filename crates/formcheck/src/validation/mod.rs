//! Form field validators.
//!
//! Every validator is total: any input produces a [`ValidationResult`],
//! and a failing result always carries the message of the first rule
//! that failed.

mod card;
mod date;
mod password;
mod phone;
mod terms;
mod text;
mod upload;

pub use card::{luhn_valid, mask_credit_card, CreditCardValidator};
pub use date::{age_on, BirthdateValidator};
pub use password::{
    password_strength, ConfirmPasswordValidator, PasswordStrength, PasswordValidator,
    StrengthTier, PASSWORD_REQUIREMENTS,
};
pub use phone::{format_phone_number, PhoneValidator};
pub use terms::TermsValidator;
pub use text::{
    parse_leading_int, QuantityValidator, RegexValidator, UrlValidator, UsernameValidator,
    ZipCodeValidator,
};
pub use upload::FileUploadValidator;

use crate::value::{FieldValue, FormData, ValueKind};

/// Outcome of validating one field.
///
/// Recomputed on every call; the coordinator copies what it needs into
/// the field state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    valid: bool,
    normalized: Option<String>,
    message: Option<String>,
    strength: Option<PasswordStrength>,
}

impl ValidationResult {
    /// A passing result with no replacement value.
    pub const fn valid() -> Self {
        Self {
            valid: true,
            normalized: None,
            message: None,
            strength: None,
        }
    }

    /// A passing result that replaces the displayed value.
    pub fn normalized(value: impl Into<String>) -> Self {
        Self {
            normalized: Some(value.into()),
            ..Self::valid()
        }
    }

    /// A failing result with its message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            normalized: None,
            message: Some(message.into()),
            strength: None,
        }
    }

    /// Attaches a password strength reading.
    #[must_use]
    pub fn with_strength(mut self, strength: PasswordStrength) -> Self {
        self.strength = Some(strength);
        self
    }

    /// Returns whether the value passed.
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the replacement display value, if any.
    pub fn normalized_value(&self) -> Option<&str> {
        self.normalized.as_deref()
    }

    /// Returns the error message for a failing result.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the password strength reading, if any.
    pub const fn strength(&self) -> Option<&PasswordStrength> {
        self.strength.as_ref()
    }
}

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value. `form` holds the raw values of every field.
    fn validate(&self, value: &FieldValue, form: &FormData) -> ValidationResult;

    /// The kind of value this validator reads.
    fn kind(&self) -> ValueKind {
        ValueKind::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_constructors() {
        let ok = ValidationResult::valid();
        assert!(ok.is_valid());
        assert_eq!(ok.message(), None);
        assert_eq!(ok.normalized_value(), None);

        let masked = ValidationResult::normalized("************6467");
        assert!(masked.is_valid());
        assert_eq!(masked.normalized_value(), Some("************6467"));

        let bad = ValidationResult::invalid("Enter a valid US ZIP code.");
        assert!(!bad.is_valid());
        assert_eq!(bad.message(), Some("Enter a valid US ZIP code."));
    }
}
