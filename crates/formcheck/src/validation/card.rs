//! Credit card number validation.

use super::{ValidationResult, Validator};
use crate::value::{FieldValue, FormData};

const CARD_LENGTH: usize = 16;

/// Checks a string of ASCII digits against the Luhn mod-10 checksum.
///
/// Returns `false` for an empty string or one containing anything other
/// than `0`-`9`.
pub fn luhn_valid(digits: &str) -> bool {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = digits
        .bytes()
        .rev()
        .map(|b| u32::from(b - b'0'))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

/// Replaces every digit that is followed by at least four more digits
/// with `*`.
pub fn mask_credit_card(number: &str) -> String {
    let chars: Vec<char> = number.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let tail = chars.get(i + 1..i + 5);
            let followed_by_four = tail.is_some_and(|t| t.iter().all(char::is_ascii_digit));
            if c.is_ascii_digit() && followed_by_four {
                '*'
            } else {
                c
            }
        })
        .collect()
}

/// Validator for 16-digit card numbers.
///
/// Separators are ignored. A passing number is returned masked.
#[derive(Debug, Clone, Default)]
pub struct CreditCardValidator;

impl CreditCardValidator {
    pub const LENGTH_MESSAGE: &'static str = "Credit card number must be 16 digits.";
    pub const CHECKSUM_MESSAGE: &'static str = "Invalid credit card number.";

    /// Creates a new CreditCardValidator.
    pub const fn new() -> Self {
        Self
    }
}

impl Validator for CreditCardValidator {
    fn validate(&self, value: &FieldValue, _form: &FormData) -> ValidationResult {
        let digits: String = value
            .as_text()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();

        if digits.len() != CARD_LENGTH {
            return ValidationResult::invalid(Self::LENGTH_MESSAGE);
        }
        if !luhn_valid(&digits) {
            return ValidationResult::invalid(Self::CHECKSUM_MESSAGE);
        }

        ValidationResult::normalized(mask_credit_card(&digits))
    }
}
