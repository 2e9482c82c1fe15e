//! Timed token issuance.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Body of `GET /get-token`.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    /// Token valid for the current and the next interval.
    pub token: String,
}

/// GET `/get-token`
async fn get_token(State(state): State<AppState>) -> Json<TokenResponse> {
    Json(TokenResponse {
        token: state.tokens.generate(),
    })
}

/// Creates the token route. It is public.
pub fn routes() -> Router<AppState> {
    Router::new().route("/get-token", get(get_token))
}
