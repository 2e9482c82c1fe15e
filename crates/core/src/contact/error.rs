//! Contact form error types.

use thiserror::Error;

use paraiso_shared::AppError;

/// Contact form validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// A field failed validation.
    #[error("{0}")]
    InvalidField(String),

    /// The selected reason needs an attached file.
    #[error("Se requiere adjuntar un archivo debido al motivo seleccionado")]
    AttachmentRequired,
}

impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        Self::Validation(err.to_string())
    }
}
