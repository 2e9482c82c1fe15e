//! Per-request access log.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};
use tracing::{error, info};

use crate::error::ErrorDetail;

/// Logs client host, method, path, status and elapsed time of every request.
///
/// Responses with status >= 400 are logged at `error` together with the
/// `detail` the client received.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let host = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| "unknown".to_string(), |info| info.0.ip().to_string());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    if status >= 400 {
        let detail = response
            .extensions()
            .get::<ErrorDetail>()
            .map_or("No detail provided", |detail| detail.0.as_str());
        error!(
            host = %host,
            method = %method,
            path = %path,
            status,
            error = %detail,
            elapsed_ms,
            "Request failed"
        );
    } else {
        info!(
            host = %host,
            method = %method,
            path = %path,
            status,
            elapsed_ms,
            "Request handled"
        );
    }

    response
}
