//! Configurable table names.
//!
//! Entities carry a default table name. Queries built from them are
//! re-pointed at the configured table, which is aliased back to the entity
//! name so the entity's qualified column references keep resolving.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, Insert, QueryTrait, Select, Statement,
    sea_query::Alias,
};

use paraiso_shared::DatabaseConfig;

/// Names of the tables the repositories read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    /// Product table.
    pub products: String,
    /// Blog post table.
    pub posts: String,
}

impl TableNames {
    /// Takes the table names from database configuration.
    #[must_use]
    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self {
            products: config.product_table.clone(),
            posts: config.post_table.clone(),
        }
    }
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            products: "charcuteria".to_string(),
            posts: "blog".to_string(),
        }
    }
}

/// Builds `select` against `table` instead of the entity's own table.
pub(crate) fn select_from<E, C>(conn: &C, select: Select<E>, table: &str) -> Statement
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let mut query = select.into_query();
    query.from_clear().from_as(Alias::new(table), E::default());
    conn.get_database_backend().build(&query)
}

/// Inserts one row into `table`.
///
/// Used by seeding and tests; the HTTP surface never writes.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub async fn insert_into<A, C>(conn: &C, table: &str, model: A) -> Result<(), DbErr>
where
    A: ActiveModelTrait,
    C: ConnectionTrait,
{
    let mut query = Insert::one(model).into_query();
    query.into_table(Alias::new(table));
    conn.execute(conn.get_database_backend().build(&query))
        .await
        .map(|_| ())
}
