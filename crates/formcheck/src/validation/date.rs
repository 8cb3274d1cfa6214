//! Birthdate validation.

use std::sync::LazyLock;

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;

use super::{ValidationResult, Validator};
use crate::value::{FieldValue, FormData};

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/(19|20)[0-9]{2}$")
        .expect("birthdate pattern is valid")
});

/// Whole years between `birth` and `today`.
///
/// One year is subtracted when today's month and day come before the
/// birth month and day.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Validator for `MM/DD/YYYY` birthdates with a minimum age.
#[derive(Debug, Clone)]
pub struct BirthdateValidator {
    minimum_age: u32,
    today: Option<NaiveDate>,
}

impl BirthdateValidator {
    pub const FORMAT_MESSAGE: &'static str = "Enter date in MM/DD/YYYY format.";
    pub const DATE_MESSAGE: &'static str = "Enter a valid date.";

    /// Creates a validator requiring an age of 18, measured from the
    /// local date at validation time.
    pub const fn new() -> Self {
        Self {
            minimum_age: 18,
            today: None,
        }
    }

    /// Sets the minimum age in whole years.
    #[must_use]
    pub const fn minimum_age(mut self, years: u32) -> Self {
        self.minimum_age = years;
        self
    }

    /// Pins the reference date instead of reading the clock.
    #[must_use]
    pub const fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn reference_date(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn age_message(&self) -> String {
        format!("You must be at least {} years old.", self.minimum_age)
    }
}

impl Default for BirthdateValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for BirthdateValidator {
    fn validate(&self, value: &FieldValue, _form: &FormData) -> ValidationResult {
        let text = value.as_text().trim();
        if !DATE_PATTERN.is_match(text) {
            return ValidationResult::invalid(Self::FORMAT_MESSAGE);
        }

        let Some(birth) = parse_us_date(text) else {
            return ValidationResult::invalid(Self::DATE_MESSAGE);
        };

        let age = age_on(birth, self.reference_date());
        if i64::from(age) < i64::from(self.minimum_age) {
            return ValidationResult::invalid(self.age_message());
        }

        ValidationResult::valid()
    }
}

/// Parses an `MM/DD/YYYY` string already known to match the pattern.
/// `None` for dates that do not exist, such as `02/30/2000`.
fn parse_us_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('/').map(str::parse::<u32>);
    let month = parts.next()?.ok()?;
    let day = parts.next()?.ok()?;
    let year = i32::try_from(parts.next()?.ok()?).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
