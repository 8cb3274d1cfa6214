//! Checkbox field types.

use crate::form::{FormFieldDef, Trigger};
use crate::validation::TermsValidator;

/// Creates a checkbox that must be ticked to submit.
pub fn terms_field(name: &str, label: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, TermsValidator::new()).trigger(Trigger::Change)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    #[test]
    fn test_terms_field() {
        let field = terms_field("terms", "I agree");
        assert_eq!(field.name, "terms");
        assert_eq!(field.trigger, Trigger::Change);
        assert_eq!(field.kind(), ValueKind::Checkbox);
    }
}
