//! Database layer with `SeaORM` entities and read-only repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for products and blog posts
//! - Repositories that query the configured tables
//! - Schema bootstrap for fresh databases

pub mod entities;
pub mod repositories;
pub mod schema;
pub mod table;

pub use repositories::{PostRepository, ProductRepository};
pub use schema::ensure_schema;
pub use table::{TableNames, insert_into};

use std::time::Duration;

use paraiso_shared::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Establishes a pooled connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    Database::connect(options).await
}
