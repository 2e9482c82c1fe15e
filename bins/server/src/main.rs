//! Paraíso API Server
//!
//! Main entry point for the Paraíso backend service.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paraiso_api::{AppState, create_router};
use paraiso_core::attachment::AttachmentValidator;
use paraiso_db::{TableNames, connect, ensure_schema};
use paraiso_shared::{AppConfig, EmailService, TimedTokenService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paraiso=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    let db = connect(&config.database).await?;
    info!(
        max_connections = config.database.max_connections,
        "Connected to database"
    );

    let tables = TableNames::from_config(&config.database);
    ensure_schema(&db, &tables).await?;

    let tokens = TimedTokenService::new(&config.token)?;
    info!(interval_secs = tokens.interval_secs(), "Timed tokens configured");

    let email = EmailService::new(config.email.clone());
    info!(
        smtp_host = %config.email.smtp_host,
        smtp_port = %config.email.smtp_port,
        "Email service configured"
    );

    let state = AppState {
        db: Arc::new(db),
        tokens: Arc::new(tokens),
        email: Arc::new(email),
        attachments: Arc::new(AttachmentValidator::default()),
        tables: Arc::new(tables),
    };

    let app = create_router(state, &config.server.allowed_origins);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
