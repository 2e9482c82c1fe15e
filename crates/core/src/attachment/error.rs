//! Attachment error types.

use thiserror::Error;

use paraiso_shared::AppError;

/// Attachment validation errors.
///
/// Every rejection is the same kind; the reason is for humans.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    /// The attachment was rejected.
    #[error("invalid attachment: {0}")]
    Invalid(String),
}

impl AttachmentError {
    /// Create an invalid attachment error.
    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid(reason.into())
    }

    /// Returns the human-readable reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::Invalid(reason) => reason,
        }
    }
}

impl From<AttachmentError> for AppError {
    fn from(err: AttachmentError) -> Self {
        Self::Validation(err.reason().to_string())
    }
}
