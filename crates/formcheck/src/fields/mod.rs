//! Field definitions for the registration form.

mod checkbox;
mod text;
mod upload;

pub use checkbox::terms_field;
pub use text::{
    birthdate_field, confirm_password_field, credit_card_field, password_field, phone_field,
    quantity_field, username_field, website_field, zip_code_field,
};
pub use upload::image_field;

use crate::config::ValidationConfig;
use crate::form::{Form, FormFieldDef};

pub const BIRTHDATE: &str = "birthdate";
pub const CREDIT_CARD: &str = "credit-card";
pub const ZIP_CODE: &str = "zip-code";
pub const USERNAME: &str = "username";
pub const WEBSITE: &str = "website";
pub const QUANTITY: &str = "quantity";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirm-password";
pub const PROFILE_PICTURE: &str = "profile-picture";
pub const TERMS: &str = "terms";
pub const PHONE_NUMBER: &str = "phone-number";

/// The eleven fields of the registration form, in submit order.
pub fn registration_fields(config: &ValidationConfig) -> Vec<FormFieldDef> {
    vec![
        birthdate_field(BIRTHDATE, "Birthdate", config),
        credit_card_field(CREDIT_CARD, "Credit Card Number"),
        zip_code_field(ZIP_CODE, "ZIP Code"),
        username_field(USERNAME, "Username", config),
        website_field(WEBSITE, "Website"),
        quantity_field(QUANTITY, "Quantity", config),
        password_field(PASSWORD, "Password"),
        confirm_password_field(CONFIRM_PASSWORD, "Confirm Password", PASSWORD),
        image_field(PROFILE_PICTURE, "Profile Picture", config),
        terms_field(TERMS, "I agree to the terms and conditions"),
        phone_field(PHONE_NUMBER, "Phone Number"),
    ]
}

/// The registration form with every field untouched.
pub fn registration_form(config: &ValidationConfig) -> Form {
    Form::new(registration_fields(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Trigger;

    #[test]
    fn test_registration_bindings() {
        let fields = registration_fields(&ValidationConfig::default());
        let bindings: Vec<(&str, Trigger)> = fields
            .iter()
            .map(|f| (f.name.as_str(), f.trigger))
            .collect();

        assert_eq!(
            bindings,
            vec![
                (BIRTHDATE, Trigger::Blur),
                (CREDIT_CARD, Trigger::Blur),
                (ZIP_CODE, Trigger::Blur),
                (USERNAME, Trigger::Blur),
                (WEBSITE, Trigger::Blur),
                (QUANTITY, Trigger::Input),
                (PASSWORD, Trigger::Input),
                (CONFIRM_PASSWORD, Trigger::Input),
                (PROFILE_PICTURE, Trigger::Change),
                (TERMS, Trigger::Change),
                (PHONE_NUMBER, Trigger::Blur),
            ]
        );
    }
}
