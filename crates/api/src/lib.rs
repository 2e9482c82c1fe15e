//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - The `/api` routes (token, products, blog, contact)
//! - Timed-token and request-logging middleware
//! - The JSON error envelope

pub mod error;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header::CONTENT_TYPE},
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use paraiso_core::attachment::AttachmentValidator;
use paraiso_db::{PostRepository, ProductRepository, TableNames};
use paraiso_shared::{EmailService, TimedTokenService};

pub use error::ApiError;
pub use middleware::TOKEN_HEADER;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Timed token generation and verification.
    pub tokens: Arc<TimedTokenService>,
    /// Contact email dispatch.
    pub email: Arc<EmailService>,
    /// Contact attachment checks.
    pub attachments: Arc<AttachmentValidator>,
    /// Tables the repositories read.
    pub tables: Arc<TableNames>,
}

impl AppState {
    /// Product repository over the configured table.
    #[must_use]
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new((*self.db).clone(), self.tables.products.clone())
    }

    /// Post repository over the configured table.
    #[must_use]
    pub fn posts(&self) -> PostRepository {
        PostRepository::new((*self.db).clone(), self.tables.posts.clone())
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    let token_header = HeaderName::from_static(TOKEN_HEADER);

    Router::new()
        .nest("/api", routes::api_routes(state.clone()))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .layer(TraceLayer::new_for_http())
        .layer(SetSensitiveRequestHeadersLayer::new([token_header]))
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

/// CORS for the frontend. An empty allow-list admits any origin.
#[must_use]
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(TOKEN_HEADER)]);

    if allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
