//! # formcheck
//!
//! Field validators and a submit-time coordinator for registration forms.
//!
//! This crate provides:
//! - Validators for birthdates, card numbers, ZIP codes, usernames,
//!   websites, quantities, passwords, uploads, checkboxes and phone numbers
//! - Per-field state tracking driven by blur/input/change events
//! - Submission that runs every validator and reports every failure
//! - Background loading of image previews
//!
//! ## Quick Start
//!
//! ```rust
//! use formcheck::fields::{registration_form, CREDIT_CARD, PHONE_NUMBER};
//! use formcheck::{Trigger, ValidationConfig};
//!
//! let mut form = registration_form(&ValidationConfig::default());
//!
//! let result = form
//!     .handle_event(CREDIT_CARD, Trigger::Blur, "4539 1488 0343 6467")
//!     .unwrap()
//!     .unwrap();
//! assert!(result.is_valid());
//! assert_eq!(form.state(CREDIT_CARD).unwrap().display(), "************6467");
//!
//! form.handle_event(PHONE_NUMBER, Trigger::Blur, "1234567890").unwrap();
//! assert_eq!(form.state(PHONE_NUMBER).unwrap().display(), "(123) 456-7890");
//!
//! // Everything else is still empty; an empty confirmation matches the
//! // empty password.
//! let outcome = form.submit();
//! assert!(!outcome.is_accepted());
//! assert_eq!(outcome.errors().unwrap().len(), 8);
//! ```
//!
//! ## Using Validators Directly
//!
//! ```rust
//! use formcheck::validation::{UsernameValidator, Validator};
//! use formcheck::{FieldValue, FormData};
//!
//! let v = UsernameValidator::new();
//! let result = v.validate(&FieldValue::from("Admin"), &FormData::new());
//! assert_eq!(result.message(), Some("This username is not allowed."));
//! ```

mod config;
mod error;
pub mod fields;
mod form;
pub mod preview;
pub mod validation;
mod value;

pub use config::{
    ValidationConfig, DEFAULT_IMAGE_TYPES, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_RESERVED_USERNAMES,
};
pub use error::{FormError, Result, ValidationErrors};
pub use form::{FieldState, FieldStatus, Form, FormBuilder, FormFieldDef, SubmitOutcome, Trigger};
pub use validation::ValidationResult;
pub use value::{FieldValue, FileUpload, FormData, ValueKind};
