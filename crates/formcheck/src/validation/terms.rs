//! Terms and conditions checkbox.

use super::{ValidationResult, Validator};
use crate::value::{FieldValue, FormData, ValueKind};

/// Validator requiring a checked box.
#[derive(Debug, Clone, Default)]
pub struct TermsValidator;

impl TermsValidator {
    pub const MESSAGE: &'static str = "You must agree to the terms and conditions.";

    /// Creates a new TermsValidator.
    pub const fn new() -> Self {
        Self
    }
}

impl Validator for TermsValidator {
    fn validate(&self, value: &FieldValue, _form: &FormData) -> ValidationResult {
        if value.is_checked() {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(Self::MESSAGE)
        }
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Checkbox
    }
}
