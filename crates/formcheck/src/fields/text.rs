//! Text field types.

use crate::config::ValidationConfig;
use crate::form::{FormFieldDef, Trigger};
use crate::validation::{
    BirthdateValidator, ConfirmPasswordValidator, CreditCardValidator, PasswordValidator,
    PhoneValidator, QuantityValidator, UrlValidator, UsernameValidator, ZipCodeValidator,
};

/// Creates a birthdate field (`MM/DD/YYYY`, minimum age from `config`).
pub fn birthdate_field(name: &str, label: &str, config: &ValidationConfig) -> FormFieldDef {
    let mut validator = BirthdateValidator::new().minimum_age(config.minimum_age);
    if let Some(today) = config.reference_date {
        validator = validator.today(today);
    }

    FormFieldDef::new(name, label, validator).help_text("MM/DD/YYYY")
}

/// Creates a credit card field. Passing numbers are masked.
pub fn credit_card_field(name: &str, label: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, CreditCardValidator::new())
}

/// Creates a US ZIP code field.
pub fn zip_code_field(name: &str, label: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, ZipCodeValidator::new())
}

/// Creates a username field.
pub fn username_field(name: &str, label: &str, config: &ValidationConfig) -> FormFieldDef {
    FormFieldDef::new(
        name,
        label,
        UsernameValidator::with_reserved(&config.reserved_usernames),
    )
    .help_text("3-15 letters, numbers or underscores")
}

/// Creates a website field.
pub fn website_field(name: &str, label: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, UrlValidator::new()).help_text("https://")
}

/// Creates a quantity field, validated as the user types.
pub fn quantity_field(name: &str, label: &str, config: &ValidationConfig) -> FormFieldDef {
    FormFieldDef::new(
        name,
        label,
        QuantityValidator::new(config.quantity_min, config.quantity_max),
    )
    .trigger(Trigger::Input)
}

/// Creates a password field with a live strength reading.
pub fn password_field(name: &str, label: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, PasswordValidator::new()).trigger(Trigger::Input)
}

/// Creates a field that must repeat `password_field` exactly.
pub fn confirm_password_field(name: &str, label: &str, password_field: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, ConfirmPasswordValidator::new(password_field))
        .trigger(Trigger::Input)
}

/// Creates a US phone number field. Passing numbers are reformatted.
pub fn phone_field(name: &str, label: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, PhoneValidator::new()).help_text("(555) 555-5555")
}
