//! HTTP error responses.
//!
//! Every failure leaves the API as `{ "detail": "..." }`. Client errors keep
//! their message; server errors are logged and collapsed to a generic one.

use axum::{
    Json,
    extract::{
        multipart::MultipartRejection,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use paraiso_core::{attachment::AttachmentError, contact::ContactError};
use paraiso_shared::{AppError, EmailError};

/// Generic detail for failed email delivery.
pub const EMAIL_FAILED_DETAIL: &str = "Error al enviar el correo electrónico";

/// Generic detail for every other server error.
pub const INTERNAL_DETAIL: &str = "Error interno del servidor";

/// Detail attached to an error response, read back by the request logger.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

/// Error returned by handlers and middleware.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// Returns the detail sent to the client.
    #[must_use]
    pub fn client_detail(&self) -> &str {
        match &self.0 {
            AppError::ExternalService(_) => EMAIL_FAILED_DETAIL,
            err if err.is_upstream() => INTERNAL_DETAIL,
            err => err.detail(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.0.is_upstream() {
            error!(code = self.0.error_code(), error = %self.0, "Request failed");
        }

        let detail = self.client_detail().to_string();
        let mut response = (status, Json(json!({ "detail": detail }))).into_response();
        response.extensions_mut().insert(ErrorDetail(detail));
        response
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<AttachmentError> for ApiError {
    fn from(err: AttachmentError) -> Self {
        Self(err.into())
    }
}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        Self(err.into())
    }
}

impl From<EmailError> for ApiError {
    fn from(err: EmailError) -> Self {
        Self(err.into())
    }
}

impl From<sea_orm::DbErr> for ApiError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self(AppError::Database(err.to_string()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}
