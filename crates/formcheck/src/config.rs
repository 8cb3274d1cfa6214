//! Tunable limits used by the validators.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{FormError, Result};

/// Upper bound for uploaded images, 2 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 2 * 1024 * 1024;

/// Image types accepted by default.
pub const DEFAULT_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif"];

/// Usernames rejected by default, compared case-insensitively.
pub const DEFAULT_RESERVED_USERNAMES: &[&str] = &["admin", "root", "superuser"];

/// Limits and word lists shared by the validators.
///
/// Every field has a default, so a JSON file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum age in whole years for the birthdate field.
    pub minimum_age: u32,
    /// Smallest accepted quantity.
    pub quantity_min: i64,
    /// Largest accepted quantity.
    pub quantity_max: i64,
    /// Largest accepted upload in bytes.
    pub max_upload_bytes: u64,
    /// Accepted MIME types for uploads.
    pub allowed_image_types: Vec<String>,
    /// Usernames that may not be registered.
    pub reserved_usernames: Vec<String>,
    /// Date ages are measured on; the local date when unset.
    pub reference_date: Option<NaiveDate>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            minimum_age: 18,
            quantity_min: 1,
            quantity_max: 100,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_image_types: DEFAULT_IMAGE_TYPES.iter().map(|s| (*s).to_string()).collect(),
            reserved_usernames: DEFAULT_RESERVED_USERNAMES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            reference_date: None,
        }
    }
}

impl ValidationConfig {
    /// Parses and checks a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Rejects settings no input could ever satisfy.
    pub fn check(&self) -> Result<()> {
        if self.quantity_min > self.quantity_max {
            return Err(FormError::InvalidConfig(format!(
                "quantity_min ({}) is greater than quantity_max ({})",
                self.quantity_min, self.quantity_max
            )));
        }
        if self.allowed_image_types.is_empty() {
            return Err(FormError::InvalidConfig(
                "allowed_image_types must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
