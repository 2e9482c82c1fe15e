//! Contact form submission.

use axum::{
    Json, Router,
    extract::{
        DefaultBodyLimit, Multipart, State,
        multipart::{Field, MultipartRejection},
    },
    routing::post,
};
use serde::Serialize;
use tracing::info;

use crate::{AppState, error::ApiError};
use paraiso_core::{attachment::MAX_FILE_SIZE, contact::ContactForm};
use paraiso_shared::{AppError, ContactEmail, EmailAttachment};

/// Room for the form fields and multipart framing on top of the file.
const MULTIPART_OVERHEAD: usize = 1024 * 1024;

/// Request body ceiling for the contact route.
#[allow(clippy::cast_possible_truncation)]
pub const CONTACT_BODY_LIMIT: usize = MAX_FILE_SIZE as usize + MULTIPART_OVERHEAD;

/// Body returned once the email has been sent.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    /// Confirmation message.
    pub message: &'static str,
}

/// A file part as received.
#[derive(Debug)]
struct Upload {
    filename: String,
    content: Vec<u8>,
}

#[derive(Debug, Default)]
struct ContactParts {
    name: Option<String>,
    reason: Option<String>,
    email: Option<String>,
    message: Option<String>,
    file: Option<Upload>,
}

impl ContactParts {
    async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut parts = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(invalid_multipart)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match name.as_str() {
                "name" => parts.name = Some(text(field).await?),
                "reason" => parts.reason = Some(text(field).await?),
                "email" => parts.email = Some(text(field).await?),
                "message" => parts.message = Some(text(field).await?),
                "file" => parts.file = upload(field).await?,
                _ => {}
            }
        }

        Ok(parts)
    }

    fn into_form(self) -> Result<(ContactForm, Option<Upload>), ApiError> {
        Ok((
            ContactForm {
                name: required(self.name, "name")?,
                reason: required(self.reason, "reason")?,
                email: required(self.email, "email")?,
                message: required(self.message, "message")?,
            },
            self.file,
        ))
    }
}

fn invalid_multipart(err: axum::extract::multipart::MultipartError) -> ApiError {
    AppError::Validation(format!("Formulario no válido: {}", err.body_text())).into()
}

fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    value.ok_or_else(|| AppError::Validation(format!("Falta el campo obligatorio: {field}")).into())
}

async fn text(field: Field<'_>) -> Result<String, ApiError> {
    field.text().await.map_err(invalid_multipart)
}

/// Reads a file part. A part without bytes counts as no file; a nameless
/// part with bytes is kept and fails extension validation.
async fn upload(field: Field<'_>) -> Result<Option<Upload>, ApiError> {
    let filename = field.file_name().unwrap_or_default().to_string();
    let content = field.bytes().await.map_err(invalid_multipart)?;

    if content.is_empty() {
        return Ok(None);
    }

    Ok(Some(Upload {
        filename,
        content: content.to_vec(),
    }))
}

/// POST `/contacto`
///
/// Validates the form, then the attachment, then sends the notification.
async fn submit_contact(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let (form, upload) = ContactParts::read(multipart?).await?.into_form()?;
    let reason = form.check(upload.is_some())?;

    let attachment = match &upload {
        Some(file) => {
            let validated = state.attachments.validate(&file.filename, &file.content)?;
            info!(
                filename = %validated.filename,
                mime_type = validated.mime_type,
                size = validated.size,
                sha256 = %validated.sha256,
                "Attachment accepted"
            );
            Some(EmailAttachment {
                filename: &file.filename,
                mime_type: validated.mime_type,
                content: &file.content,
            })
        }
        None => None,
    };

    let contact = ContactEmail {
        name: &form.name,
        email: &form.email,
        reason: reason.as_str(),
        message: &form.message,
    };
    state.email.send_contact(&contact, attachment.as_ref()).await?;

    Ok(Json(ContactResponse {
        message: "Formulario enviado correctamente",
    }))
}

/// Creates the contact route.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/contacto", post(submit_contact))
        .layer(DefaultBodyLimit::max(CONTACT_BODY_LIMIT))
}
