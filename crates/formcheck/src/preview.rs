//! Background loading of image previews.
//!
//! A preview is requested after an upload passes validation. The load
//! runs on the ambient tokio runtime and reports back over a channel;
//! the validation result never waits for it.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::error::{FormError, Result};
use crate::value::FileUpload;

/// A loaded preview for an upload field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Field the preview belongs to.
    pub field: String,
    /// Validation generation that requested it.
    pub generation: u64,
    /// `data:` URL with the file contents.
    pub data_url: String,
}

/// Encodes bytes as a base64 `data:` URL.
pub fn data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}

/// Reads an upload from disk and returns it as a `data:` URL.
pub async fn load_preview(file: &FileUpload) -> Result<String> {
    let path = file.path.as_ref().ok_or_else(|| {
        FormError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("no path for upload {}", file.name),
        ))
    })?;
    let bytes = tokio::fs::read(path).await?;
    Ok(data_url(&file.mime_type, &bytes))
}

/// Spawns preview loads and forwards the results.
#[derive(Debug, Clone)]
pub struct PreviewLoader {
    tx: mpsc::UnboundedSender<Preview>,
}

impl PreviewLoader {
    /// Creates a loader and the receiver its previews arrive on.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Preview>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Starts loading `file` without waiting for it.
    ///
    /// Returns `false` when nothing was started: the upload has no path
    /// or no tokio runtime is running on this thread.
    pub fn request(&self, field: &str, generation: u64, file: &FileUpload) -> bool {
        if file.path.is_none() {
            debug!(field, "Upload has no path, skipping preview");
            return false;
        }

        let Ok(handle) = Handle::try_current() else {
            warn!(field, "No async runtime available, skipping preview");
            return false;
        };

        let tx = self.tx.clone();
        let field = field.to_string();
        let file = file.clone();
        handle.spawn(async move {
            match load_preview(&file).await {
                Ok(data_url) => {
                    debug!(field = %field, generation, "Preview loaded");
                    // The form may be gone; nothing to update then.
                    let _ = tx.send(Preview {
                        field,
                        generation,
                        data_url,
                    });
                }
                Err(err) => {
                    warn!(field = %field, error = %err, "Failed to load preview");
                }
            }
        });
        true
    }
}
