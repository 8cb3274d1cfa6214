//! Field values as read from the form.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

/// A file chosen in an upload field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUpload {
    /// File name as reported by the browser.
    pub name: String,
    /// MIME type, e.g. `image/png`.
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
    /// Location of the file contents, used to load a preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl FileUpload {
    /// Creates a new upload description without a backing path.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
            path: None,
        }
    }

    /// Sets the path the preview is loaded from.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    File,
    Checkbox,
}

impl ValueKind {
    /// Returns the empty value for this kind.
    pub fn empty(self) -> FieldValue {
        match self {
            Self::Text => FieldValue::Text(String::new()),
            Self::File => FieldValue::File(None),
            Self::Checkbox => FieldValue::Checked(false),
        }
    }

    /// Returns the name used in error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::File => "file",
            Self::Checkbox => "checkbox",
        }
    }
}

/// A raw value supplied by the user.
///
/// In JSON, strings and numbers are text, booleans are checkboxes, and
/// objects or `null` are file selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(#[serde(deserialize_with = "text_or_number")] String),
    Checked(bool),
    File(Option<FileUpload>),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

impl FieldValue {
    /// Returns the kind of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Checked(_) => ValueKind::Checkbox,
            Self::File(_) => ValueKind::File,
        }
    }

    /// Returns the text, or `""` for non-text values.
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            _ => "",
        }
    }

    /// Returns the checkbox state, `false` for non-checkbox values.
    pub const fn is_checked(&self) -> bool {
        matches!(self, Self::Checked(true))
    }

    /// Returns the selected file, if any.
    pub const fn as_file(&self) -> Option<&FileUpload> {
        match self {
            Self::File(file) => file.as_ref(),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Checked(value)
    }
}

impl From<FileUpload> for FieldValue {
    fn from(value: FileUpload) -> Self {
        Self::File(Some(value))
    }
}

/// Read-only snapshot of the raw values of every field.
///
/// Validators that depend on another field (confirm password reads
/// password) look the other value up here.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    values: HashMap<String, FieldValue>,
}

impl FormData {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(field.into(), value.into());
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Returns the value of a field.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Returns the text of a field, `""` when absent.
    pub fn text(&self, field: &str) -> &str {
        self.values.get(field).map_or("", FieldValue::as_text)
    }

    /// Parses a JSON object of field values.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let values: HashMap<String, FieldValue> = serde_json::from_str(json)?;
        Ok(Self { values })
    }

    /// Iterates over all values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}
