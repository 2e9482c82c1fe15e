//! Schema bootstrap.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, Schema, sea_query::Alias};
use tracing::info;

use crate::entities::{posts, products};
use crate::table::TableNames;

/// Creates the product and post tables if they do not exist yet.
///
/// # Errors
///
/// Returns an error if a `CREATE TABLE` statement fails.
pub async fn ensure_schema<C>(conn: &C, tables: &TableNames) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    create_if_missing(conn, products::Entity, &tables.products).await?;
    create_if_missing(conn, posts::Entity, &tables.posts).await?;
    Ok(())
}

async fn create_if_missing<C, E>(conn: &C, entity: E, table: &str) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let backend = conn.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.table(Alias::new(table)).if_not_exists();

    conn.execute(backend.build(&stmt)).await?;
    info!(table = %table, "Ensured table exists");
    Ok(())
}
