//! Timed-token middleware for protected routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{AppState, error::ApiError};
use paraiso_shared::AppError;

/// Header carrying the timed token.
pub const TOKEN_HEADER: &str = "x-timed-token";

/// Rejects requests without a currently valid timed token.
///
/// A missing header yields 401; a header that does not verify yields 403.
///
/// # Errors
///
/// Returns `ApiError` wrapping `Unauthorized` or `Forbidden`.
pub async fn require_timed_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(header) = request.headers().get(TOKEN_HEADER) else {
        return Err(AppError::Unauthorized("Token no proporcionado".to_string()).into());
    };

    let valid = header
        .to_str()
        .is_ok_and(|token| state.tokens.verify(token));

    if !valid {
        debug!(path = %request.uri().path(), "Rejected timed token");
        return Err(AppError::Forbidden("Token inválido o expirado".to_string()).into());
    }

    Ok(next.run(request).await)
}
