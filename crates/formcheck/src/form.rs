//! Field definitions and the form coordinator.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::error::{FormError, Result, ValidationErrors};
use crate::preview::{Preview, PreviewLoader};
use crate::validation::{PasswordStrength, ValidationResult, Validator};
use crate::value::{FieldValue, FormData, ValueKind};

/// Interaction event a field validates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Focus leaves the field.
    Blur,
    /// Every keystroke.
    Input,
    /// Committed change of a file or checkbox.
    Change,
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Blur => "blur",
            Self::Input => "input",
            Self::Change => "change",
        };
        f.pad(name)
    }
}

/// Definition of a form field.
pub struct FormFieldDef {
    /// Field name.
    pub name: String,
    /// Field label.
    pub label: String,
    /// Event that validates the field.
    pub trigger: Trigger,
    /// Help text.
    pub help_text: Option<String>,
    /// Validator.
    pub validator: Box<dyn Validator>,
}

impl std::fmt::Debug for FormFieldDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormFieldDef")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("trigger", &self.trigger)
            .field("help_text", &self.help_text)
            .finish_non_exhaustive()
    }
}

impl FormFieldDef {
    /// Creates a new field definition validated on blur.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        validator: impl Validator + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            trigger: Trigger::Blur,
            help_text: None,
            validator: Box::new(validator),
        }
    }

    /// Sets the validating event.
    #[must_use]
    pub fn trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Sets help text.
    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// The kind of value this field holds.
    pub fn kind(&self) -> ValueKind {
        self.validator.kind()
    }
}

/// Where a field is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Untouched,
    Valid,
    Invalid,
}

/// What the UI shows for one field.
#[derive(Debug, Clone)]
pub struct FieldState {
    raw: FieldValue,
    display: Option<String>,
    status: FieldStatus,
    message: Option<String>,
    strength: Option<PasswordStrength>,
    preview: Option<String>,
    generation: u64,
}

impl FieldState {
    fn new(kind: ValueKind) -> Self {
        Self {
            raw: kind.empty(),
            display: None,
            status: FieldStatus::Untouched,
            message: None,
            strength: None,
            preview: None,
            generation: 0,
        }
    }

    /// The value as the user entered it.
    pub const fn raw(&self) -> &FieldValue {
        &self.raw
    }

    /// The text shown in the field: the normalized value after a
    /// passing validation, otherwise the raw text.
    pub fn display(&self) -> &str {
        self.display.as_deref().unwrap_or_else(|| self.raw.as_text())
    }

    /// Result of the latest validation.
    pub const fn status(&self) -> FieldStatus {
        self.status
    }

    /// Error message of the latest validation, if it failed.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Password strength of the latest validation, for the password field.
    pub const fn strength(&self) -> Option<&PasswordStrength> {
        self.strength.as_ref()
    }

    /// Loaded preview `data:` URL for upload fields.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Whether `value` is the normalized text this field is showing.
    fn shows(&self, value: &FieldValue) -> bool {
        matches!((&self.display, value), (Some(shown), FieldValue::Text(text)) if shown == text)
    }

    fn apply(&mut self, result: &ValidationResult) {
        self.status = if result.is_valid() {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        };
        self.message = result.message().map(ToString::to_string);
        self.display = result.normalized_value().map(ToString::to_string);
        self.strength = result.strength().copied();
    }
}

/// Outcome of submitting the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed.
    Accepted,
    /// At least one field failed; every failure is listed.
    Rejected(ValidationErrors),
}

impl SubmitOutcome {
    pub const ACCEPTED_MESSAGE: &'static str = "Form submitted successfully!";
    pub const REJECTED_MESSAGE: &'static str = "Please correct the errors in the form.";

    /// Returns whether the submission may proceed.
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The message to surface to the user.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Accepted => Self::ACCEPTED_MESSAGE,
            Self::Rejected(_) => Self::REJECTED_MESSAGE,
        }
    }

    /// Per-field errors of a rejected submission.
    pub const fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Accepted => None,
            Self::Rejected(errors) => Some(errors),
        }
    }
}

/// Coordinates validation of a set of fields.
///
/// Owns the state of every field. Events validate the field they are
/// bound to; [`submit`](Self::submit) validates everything.
#[derive(Debug)]
pub struct Form {
    fields: Vec<FormFieldDef>,
    states: HashMap<String, FieldState>,
    previews: Option<PreviewLoader>,
}

impl Form {
    /// Creates a form with every field untouched and empty.
    pub fn new(fields: Vec<FormFieldDef>) -> Self {
        let states = fields
            .iter()
            .map(|field| (field.name.clone(), FieldState::new(field.kind())))
            .collect();
        Self {
            fields,
            states,
            previews: None,
        }
    }

    /// Loads previews for passing uploads through `loader`.
    #[must_use]
    pub fn with_previews(mut self, loader: PreviewLoader) -> Self {
        self.previews = Some(loader);
        self
    }

    /// The field definitions, in registration order.
    pub fn fields(&self) -> &[FormFieldDef] {
        &self.fields
    }

    /// The state of one field.
    pub fn state(&self, name: &str) -> Option<&FieldState> {
        self.states.get(name)
    }

    /// Field names with their states, in registration order.
    pub fn states(&self) -> impl Iterator<Item = (&str, &FieldState)> {
        self.fields
            .iter()
            .filter_map(|field| Some((field.name.as_str(), self.states.get(&field.name)?)))
    }

    /// The raw values of every field.
    pub fn data(&self) -> FormData {
        let mut data = FormData::new();
        for (name, state) in self.states() {
            data.insert(name, state.raw.clone());
        }
        data
    }

    fn field_index(&self, name: &str) -> Result<usize> {
        self.fields
            .iter()
            .position(|field| field.name == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    /// Records an edit without validating.
    ///
    /// A value equal to the normalized text the field is showing leaves
    /// the stored raw value in place, so a masked card number or
    /// formatted phone number re-validates as what the user typed.
    pub fn set_value(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        let index = self.field_index(name)?;
        let value = value.into();
        let kind = self.fields[index].kind();
        if value.kind() != kind {
            return Err(FormError::WrongValueKind {
                field: name.to_string(),
                expected: kind.as_str(),
            });
        }

        let state = self
            .states
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        if state.shows(&value) {
            return Ok(());
        }
        state.raw = value;
        state.display = None;
        Ok(())
    }

    /// Records an edit and validates it if `trigger` is the field's
    /// bound event.
    pub fn handle_event(
        &mut self,
        name: &str,
        trigger: Trigger,
        value: impl Into<FieldValue>,
    ) -> Result<Option<ValidationResult>> {
        self.set_value(name, value)?;
        let index = self.field_index(name)?;
        if self.fields[index].trigger != trigger {
            return Ok(None);
        }
        self.validate_field(name).map(Some)
    }

    /// Validates one field now and updates its state.
    pub fn validate_field(&mut self, name: &str) -> Result<ValidationResult> {
        let index = self.field_index(name)?;
        let data = self.data();
        let field = &self.fields[index];
        let raw = data.get(name).cloned().unwrap_or_else(|| field.kind().empty());
        let result = field.validator.validate(&raw, &data);
        let kind = field.kind();

        debug!(
            field = name,
            valid = result.is_valid(),
            message = result.message().unwrap_or(""),
            "Validated field"
        );

        let state = self
            .states
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        state.apply(&result);

        if kind == ValueKind::File {
            state.generation += 1;
            state.preview = None;
            if result.is_valid() {
                if let (Some(loader), Some(file)) = (&self.previews, raw.as_file()) {
                    loader.request(name, state.generation, file);
                }
            }
        }

        Ok(result)
    }

    /// Validates every field, in registration order, without stopping
    /// at the first failure.
    pub fn submit(&mut self) -> SubmitOutcome {
        let names: Vec<String> = self.fields.iter().map(|f| f.name.clone()).collect();
        let mut errors = ValidationErrors::new();

        for name in &names {
            match self.validate_field(name) {
                Ok(result) => {
                    if let Some(message) = result.message() {
                        errors.add(name, message);
                    }
                }
                Err(err) => errors.add(name, err.to_string()),
            }
        }

        if errors.is_empty() {
            info!(fields = names.len(), "Form accepted");
            SubmitOutcome::Accepted
        } else {
            info!(
                fields = names.len(),
                failed = errors.len(),
                "Form rejected"
            );
            SubmitOutcome::Rejected(errors)
        }
    }

    /// Installs a loaded preview.
    ///
    /// Returns `false` and drops the preview when the field has been
    /// validated again since it was requested.
    pub fn apply_preview(&mut self, preview: Preview) -> bool {
        let Some(state) = self.states.get_mut(&preview.field) else {
            return false;
        };
        if state.generation != preview.generation || state.status != FieldStatus::Valid {
            debug!(field = %preview.field, "Dropping stale preview");
            return false;
        }
        state.preview = Some(preview.data_url);
        true
    }

    /// Puts every field back to untouched and empty.
    ///
    /// Preview generations keep counting up, so loads still in flight
    /// from before the reset are never applied.
    pub fn reset(&mut self) {
        for field in &self.fields {
            let mut state = FieldState::new(field.kind());
            if let Some(old) = self.states.get(&field.name) {
                state.generation = old.generation + 1;
            }
            self.states.insert(field.name.clone(), state);
        }
    }
}

/// A simple form builder for creating forms programmatically.
#[derive(Debug, Default)]
pub struct FormBuilder {
    fields: Vec<FormFieldDef>,
    previews: Option<PreviewLoader>,
}

impl FormBuilder {
    /// Creates a new form builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: FormFieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Loads upload previews through `loader`.
    #[must_use]
    pub fn previews(mut self, loader: PreviewLoader) -> Self {
        self.previews = Some(loader);
        self
    }

    /// Builds the form.
    pub fn build(self) -> Form {
        let form = Form::new(self.fields);
        match self.previews {
            Some(loader) => form.with_previews(loader),
            None => form,
        }
    }
}
