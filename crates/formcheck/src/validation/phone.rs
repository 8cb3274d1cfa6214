//! US phone number validation.

use super::{ValidationResult, Validator};
use crate::value::{FieldValue, FormData};

/// Formats a value as `(AAA) BBB-CCCC`.
///
/// Everything but ASCII digits is dropped first; `None` unless exactly
/// ten digits remain.
pub fn format_phone_number(value: &str) -> Option<String> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 10 {
        return None;
    }
    Some(format!(
        "({}) {}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..]
    ))
}

/// Validator for ten-digit US phone numbers.
///
/// A passing number is returned in `(AAA) BBB-CCCC` form.
#[derive(Debug, Clone, Default)]
pub struct PhoneValidator;

impl PhoneValidator {
    pub const MESSAGE: &'static str = "Enter a valid US phone number.";

    /// Creates a new PhoneValidator.
    pub const fn new() -> Self {
        Self
    }
}

impl Validator for PhoneValidator {
    fn validate(&self, value: &FieldValue, _form: &FormData) -> ValidationResult {
        format_phone_number(value.as_text())
            .map_or_else(|| ValidationResult::invalid(Self::MESSAGE), ValidationResult::normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(input: &str) -> ValidationResult {
        PhoneValidator::new().validate(&FieldValue::from(input), &FormData::new())
    }

    #[test]
    fn test_format() {
        assert_eq!(
            format_phone_number("1234567890").as_deref(),
            Some("(123) 456-7890")
        );
        assert_eq!(
            format_phone_number("123.456.7890").as_deref(),
            Some("(123) 456-7890")
        );
        assert_eq!(format_phone_number("123456"), None);
        assert_eq!(format_phone_number("+1 123 456 7890"), None);
    }

    #[test]
    fn test_valid_number_is_formatted() {
        let result = check("1234567890");
        assert!(result.is_valid());
        assert_eq!(result.normalized_value(), Some("(123) 456-7890"));
    }

    #[test]
    fn test_short_number_is_left_alone() {
        let result = check("123456");
        assert_eq!(result.message(), Some(PhoneValidator::MESSAGE));
        assert_eq!(result.normalized_value(), None);
    }

    #[test]
    fn test_formatted_number_revalidates() {
        let result = check("(123) 456-7890");
        assert!(result.is_valid());
        assert_eq!(result.normalized_value(), Some("(123) 456-7890"));
    }
}
