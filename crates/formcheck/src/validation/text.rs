//! Single-line text validators: ZIP code, username, website, quantity.

use std::sync::LazyLock;

use regex::Regex;

use super::{ValidationResult, Validator};
use crate::config::DEFAULT_RESERVED_USERNAMES;
use crate::value::{FieldValue, FormData};

static ZIP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("ZIP pattern is valid"));

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{3,15}$").expect("username pattern is valid"));

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://[^\s/$.?#].[^\s]*$").expect("URL pattern is valid")
});

/// Validator using a custom regex pattern.
///
/// The value is trimmed before matching.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: Regex,
    message: String,
}

impl RegexValidator {
    /// Creates a validator from an already compiled pattern.
    pub fn from_regex(pattern: Regex, message: impl Into<String>) -> Self {
        Self {
            pattern,
            message: message.into(),
        }
    }
}

impl Validator for RegexValidator {
    fn validate(&self, value: &FieldValue, _form: &FormData) -> ValidationResult {
        if self.pattern.is_match(value.as_text().trim()) {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(self.message.clone())
        }
    }
}

/// Validator for US ZIP and ZIP+4 codes.
#[derive(Debug, Clone)]
pub struct ZipCodeValidator(RegexValidator);

impl ZipCodeValidator {
    pub const MESSAGE: &'static str = "Enter a valid US ZIP code.";

    /// Creates a new ZipCodeValidator.
    pub fn new() -> Self {
        Self(RegexValidator::from_regex(ZIP_PATTERN.clone(), Self::MESSAGE))
    }
}

impl Default for ZipCodeValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for ZipCodeValidator {
    fn validate(&self, value: &FieldValue, form: &FormData) -> ValidationResult {
        self.0.validate(value, form)
    }
}

/// Validator for usernames: 3-15 ASCII word characters, not reserved.
#[derive(Debug, Clone)]
pub struct UsernameValidator {
    reserved: Vec<String>,
}

impl UsernameValidator {
    pub const FORMAT_MESSAGE: &'static str = "3-15 chars; letters, numbers, underscores only.";
    pub const RESERVED_MESSAGE: &'static str = "This username is not allowed.";

    /// Creates a validator rejecting `admin`, `root` and `superuser`.
    pub fn new() -> Self {
        Self::with_reserved(DEFAULT_RESERVED_USERNAMES.iter().copied())
    }

    /// Creates a validator with a custom reserved list.
    pub fn with_reserved<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            reserved: reserved
                .into_iter()
                .map(|name| name.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }
}

impl Default for UsernameValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for UsernameValidator {
    fn validate(&self, value: &FieldValue, _form: &FormData) -> ValidationResult {
        let username = value.as_text().trim();
        if !USERNAME_PATTERN.is_match(username) {
            return ValidationResult::invalid(Self::FORMAT_MESSAGE);
        }

        let lowered = username.to_ascii_lowercase();
        if self.reserved.iter().any(|name| *name == lowered) {
            return ValidationResult::invalid(Self::RESERVED_MESSAGE);
        }

        ValidationResult::valid()
    }
}

/// Validator for http(s) URLs.
#[derive(Debug, Clone, Default)]
pub struct UrlValidator;

impl UrlValidator {
    pub const MESSAGE: &'static str = "Enter a valid URL starting with http:// or https://";

    /// Creates a new UrlValidator.
    pub const fn new() -> Self {
        Self
    }
}

impl Validator for UrlValidator {
    fn validate(&self, value: &FieldValue, _form: &FormData) -> ValidationResult {
        if URL_PATTERN.is_match(value.as_text().trim()) {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(Self::MESSAGE)
        }
    }
}

/// Reads the integer at the start of `text`.
///
/// Leading whitespace and one sign are skipped, then the longest run of
/// ASCII digits is read; anything after it is ignored. Returns `None`
/// when no digit follows. Values beyond `i64` saturate.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let rest = text.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut seen = false;
    let mut magnitude: i64 = 0;
    for digit in digits {
        seen = true;
        magnitude = magnitude
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }

    seen.then_some(if negative { -magnitude } else { magnitude })
}

/// Validator for an integer quantity within an inclusive range.
#[derive(Debug, Clone)]
pub struct QuantityValidator {
    min: i64,
    max: i64,
    message: String,
}

impl QuantityValidator {
    /// Creates a new QuantityValidator with min and max bounds.
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min,
            max,
            message: format!("Quantity must be between {min} and {max}."),
        }
    }
}

impl Default for QuantityValidator {
    fn default() -> Self {
        Self::new(1, 100)
    }
}

impl Validator for QuantityValidator {
    fn validate(&self, value: &FieldValue, _form: &FormData) -> ValidationResult {
        match parse_leading_int(value.as_text()) {
            Some(n) if (self.min..=self.max).contains(&n) => ValidationResult::valid(),
            _ => ValidationResult::invalid(self.message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(validator: &impl Validator, input: &str) -> ValidationResult {
        validator.validate(&FieldValue::from(input), &FormData::new())
    }

    #[test]
    fn test_zip_code() {
        let v = ZipCodeValidator::new();
        assert!(check(&v, "12345").is_valid());
        assert!(check(&v, "12345-6789").is_valid());
        assert!(check(&v, " 12345 ").is_valid());
        for input in ["1234", "123456", "12345-678", "12345-", "abcde", ""] {
            assert_eq!(
                check(&v, input).message(),
                Some(ZipCodeValidator::MESSAGE),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_username() {
        let v = UsernameValidator::new();
        assert!(check(&v, "valid_user1").is_valid());
        assert!(check(&v, "abc").is_valid());
        assert!(check(&v, "a23456789012345").is_valid());
        assert!(check(&v, " valid_user1 ").is_valid());
        assert!(check(&v, "\tvalid_user1\n").is_valid());

        for input in ["ab", "a234567890123456", "bad name", "naïve", "user-1", ""] {
            assert_eq!(
                check(&v, input).message(),
                Some(UsernameValidator::FORMAT_MESSAGE),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_reserved_username_any_case() {
        let v = UsernameValidator::new();
        for input in ["admin", "Admin", "ADMIN", "root", "SuperUser"] {
            assert_eq!(
                check(&v, input).message(),
                Some(UsernameValidator::RESERVED_MESSAGE),
                "input {input:?}"
            );
        }
        assert_eq!(
            check(&v, " Admin ").message(),
            Some(UsernameValidator::RESERVED_MESSAGE)
        );
        assert!(check(&v, "admin1").is_valid());
    }

    #[test]
    fn test_custom_reserved_list() {
        let v = UsernameValidator::with_reserved(["Guest"]);
        assert!(!check(&v, "guest").is_valid());
        assert!(check(&v, "admin").is_valid());
    }

    #[test]
    fn test_url() {
        let v = UrlValidator::new();
        assert!(check(&v, "https://example.com").is_valid());
        assert!(check(&v, "http://example.com/path?q=1").is_valid());
        assert!(check(&v, "HTTPS://EXAMPLE.COM").is_valid());
        assert!(check(&v, "http://a.").is_valid());
        assert!(check(&v, " https://example.com ").is_valid());
        assert!(check(&v, "http://é.").is_valid());
        // Matching is per scalar value; a lone emoji host is one character.
        assert!(!check(&v, "http://\u{1F600}").is_valid());

        for input in [
            "example.com",
            "ftp://example.com",
            "http://",
            "http://x",
            "http:///path",
            "http://.example.com",
            "http://exa mple.com",
        ] {
            assert_eq!(
                check(&v, input).message(),
                Some(UrlValidator::MESSAGE),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  7"), Some(7));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("7.9"), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+5"), Some(5));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_quantity_range() {
        let v = QuantityValidator::default();
        assert!(check(&v, "1").is_valid());
        assert!(check(&v, "50").is_valid());
        assert!(check(&v, "100").is_valid());
        assert!(check(&v, "100.5").is_valid());

        for input in ["0", "101", "-1", "abc", ""] {
            assert_eq!(
                check(&v, input).message(),
                Some("Quantity must be between 1 and 100."),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_regex_validator() {
        let pattern = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
        let v = RegexValidator::from_regex(pattern, "Enter a valid date.");
        assert!(check(&v, "2024-01-15").is_valid());
        assert!(check(&v, " 2024-01-15 ").is_valid());
        assert_eq!(check(&v, "not a date").message(), Some("Enter a valid date."));
    }
}
