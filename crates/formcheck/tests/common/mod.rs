#![allow(dead_code)]

use chrono::NaiveDate;
use formcheck::fields::{self, registration_form};
use formcheck::{FileUpload, Form, ValidationConfig};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

pub fn config() -> ValidationConfig {
    ValidationConfig {
        reference_date: Some(today()),
        ..ValidationConfig::default()
    }
}

pub fn form() -> Form {
    registration_form(&config())
}

pub fn avatar() -> FileUpload {
    FileUpload::new("avatar.png", "image/png", 48_000)
}

/// A form where every field holds a passing value.
pub fn filled_form() -> Form {
    let mut form = form();
    fill(&mut form);
    form
}

pub fn fill(form: &mut Form) {
    let text = [
        (fields::BIRTHDATE, "02/29/2000"),
        (fields::CREDIT_CARD, "4539-1488-0343-6467"),
        (fields::ZIP_CODE, "94105-1234"),
        (fields::USERNAME, "valid_user1"),
        (fields::WEBSITE, "https://example.com"),
        (fields::QUANTITY, "3"),
        (fields::PASSWORD, "Abcdef1!"),
        (fields::CONFIRM_PASSWORD, "Abcdef1!"),
        (fields::PHONE_NUMBER, "123-456-7890"),
    ];
    for (name, value) in text {
        form.set_value(name, value)
            .unwrap_or_else(|e| panic!("Failed to set {name}: {e}"));
    }
    form.set_value(fields::PROFILE_PICTURE, avatar()).unwrap();
    form.set_value(fields::TERMS, true).unwrap();
}
