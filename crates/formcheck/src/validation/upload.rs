//! Image upload validation.

use super::{ValidationResult, Validator};
use crate::config::{DEFAULT_IMAGE_TYPES, DEFAULT_MAX_UPLOAD_BYTES};
use crate::value::{FieldValue, FormData, ValueKind};

/// Validator for an image upload: present, an accepted type, small
/// enough.
#[derive(Debug, Clone)]
pub struct FileUploadValidator {
    allowed_types: Vec<String>,
    max_bytes: u64,
}

impl FileUploadValidator {
    pub const MISSING_MESSAGE: &'static str = "Please select a file.";
    pub const TYPE_MESSAGE: &'static str = "File type must be JPG, JPEG, PNG, or GIF.";
    pub const SIZE_MESSAGE: &'static str = "File size must be less than 2MB.";

    /// Creates a validator accepting JPEG, PNG and GIF up to 2 MiB.
    pub fn new() -> Self {
        Self {
            allowed_types: DEFAULT_IMAGE_TYPES.iter().map(|s| (*s).to_string()).collect(),
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    /// Replaces the accepted MIME types.
    #[must_use]
    pub fn allowed_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the largest accepted size in bytes.
    #[must_use]
    pub fn max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }
}

impl Default for FileUploadValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for FileUploadValidator {
    fn validate(&self, value: &FieldValue, _form: &FormData) -> ValidationResult {
        let Some(file) = value.as_file() else {
            return ValidationResult::invalid(Self::MISSING_MESSAGE);
        };

        if !self.allowed_types.iter().any(|t| *t == file.mime_type) {
            return ValidationResult::invalid(Self::TYPE_MESSAGE);
        }

        if file.size > self.max_bytes {
            return ValidationResult::invalid(Self::SIZE_MESSAGE);
        }

        ValidationResult::valid()
    }

    fn kind(&self) -> ValueKind {
        ValueKind::File
    }
}
