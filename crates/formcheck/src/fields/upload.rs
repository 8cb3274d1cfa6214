//! File upload field types.

use crate::config::ValidationConfig;
use crate::form::{FormFieldDef, Trigger};
use crate::validation::FileUploadValidator;

/// Creates an image upload field with type and size limits from
/// `config`.
pub fn image_field(name: &str, label: &str, config: &ValidationConfig) -> FormFieldDef {
    let validator = FileUploadValidator::new()
        .allowed_types(config.allowed_image_types.iter().cloned())
        .max_bytes(config.max_upload_bytes);

    FormFieldDef::new(name, label, validator)
        .trigger(Trigger::Change)
        .help_text("JPG, PNG or GIF, 2MB max")
}
