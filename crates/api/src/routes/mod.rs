//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::require_timed_token};

pub mod blog;
pub mod contact;
pub mod health;
pub mod products;
pub mod token;

/// Creates the API router: public routes plus the token-protected ones.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes(state: AppState) -> Router<AppState> {
    let protected_routes = Router::new()
        .merge(products::routes())
        .merge(blog::routes())
        .merge(contact::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_timed_token,
        ));

    Router::new()
        .merge(health::routes())
        .merge(token::routes())
        .merge(protected_routes)
}
