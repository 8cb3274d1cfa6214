//! Error types for forms.

use std::collections::BTreeMap;
use thiserror::Error;

/// Form-specific errors.
///
/// A field failing one of its rules is not an error: that outcome is a
/// [`ValidationResult`](crate::ValidationResult). These variants cover
/// misuse of the coordinator and I/O around it.
#[derive(Debug, Error)]
pub enum FormError {
    /// No field with this name is registered on the form.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The value kind does not match what the field expects.
    #[error("field {field} expects a {expected} value")]
    WrongValueKind {
        field: String,
        expected: &'static str,
    },

    /// Configuration values are inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parsing JSON input failed.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Collection of validation errors by field.
///
/// Fields are kept in name order so reports are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    /// Errors keyed by field name.
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    /// Returns whether a field has at least one error.
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Returns all errors as a flat list.
    pub fn all_errors(&self) -> Vec<(&str, &str)> {
        self.errors
            .iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |msg| (field.as_str(), msg.as_str()))
            })
            .collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, messages) in &self.errors {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
