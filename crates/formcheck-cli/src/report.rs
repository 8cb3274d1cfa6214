//! Submission reports.

use serde::Serialize;

use formcheck::preview::Preview;
use formcheck::validation::StrengthTier;
use formcheck::{FieldStatus, Form, SubmitOutcome};

#[derive(Debug, Serialize)]
pub struct StrengthReport {
    pub percent: f64,
    pub tier: StrengthTier,
    pub unmet: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct FieldReport {
    pub name: String,
    pub label: String,
    pub valid: bool,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<StrengthReport>,
}

#[derive(Debug, Serialize)]
pub struct PreviewReport {
    pub field: String,
    pub data_url_len: usize,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub accepted: bool,
    pub message: &'static str,
    pub fields: Vec<FieldReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub previews: Vec<PreviewReport>,
}

impl Report {
    /// Collects the state of every field after a submit.
    pub fn new(form: &Form, outcome: &SubmitOutcome) -> Self {
        let fields = form
            .fields()
            .iter()
            .filter_map(|def| {
                let state = form.state(&def.name)?;
                let value = match state.raw().as_file() {
                    Some(file) => file.name.clone(),
                    None if state.raw().is_checked() => "checked".to_string(),
                    None => state.display().to_string(),
                };
                Some(FieldReport {
                    name: def.name.clone(),
                    label: def.label.clone(),
                    valid: state.status() == FieldStatus::Valid,
                    value,
                    message: state.message().map(ToString::to_string),
                    strength: state.strength().map(|s| StrengthReport {
                        percent: s.percent(),
                        tier: s.tier(),
                        unmet: s.unmet(),
                    }),
                })
            })
            .collect();

        Self {
            accepted: outcome.is_accepted(),
            message: outcome.message(),
            fields,
            previews: Vec::new(),
        }
    }

    pub fn add_preview(&mut self, preview: &Preview) {
        self.previews.push(PreviewReport {
            field: preview.field.clone(),
            data_url_len: preview.data_url.len(),
        });
    }

    /// Renders the report for a terminal.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for field in &self.fields {
            let marker = if field.valid { "[ok]" } else { "[!!]" };
            let detail = field.message.as_deref().unwrap_or(&field.value);
            out.push_str(&format!("{marker} {:<18} {detail}\n", field.name));
            if let Some(strength) = &field.strength {
                out.push_str(&format!(
                    "     {:<18} strength {:.0}% ({})\n",
                    "", strength.percent, strength.tier
                ));
            }
        }
        for preview in &self.previews {
            out.push_str(&format!(
                "preview {} loaded ({} bytes)\n",
                preview.field, preview.data_url_len
            ));
        }
        out.push_str(self.message);
        out.push('\n');
        out
    }
}
