//! Product repository.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::products::{Column, Entity as ProductEntity, Model as ProductModel};
use crate::table::select_from;

/// Read access to the product table.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: DatabaseConnection,
    table: String,
}

impl ProductRepository {
    /// Creates a repository reading from `table`.
    #[must_use]
    pub fn new(db: DatabaseConnection, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
        }
    }

    /// Lists the products in `language`, ordered by category then name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_by_language(&self, language: &str) -> Result<Vec<ProductModel>, DbErr> {
        let select = ProductEntity::find()
            .filter(Column::Language.eq(language))
            .order_by_asc(Column::Category)
            .order_by_asc(Column::Name);

        ProductEntity::find()
            .from_raw_sql(select_from(&self.db, select, &self.table))
            .all(&self.db)
            .await
    }

    /// Finds one product by id and language.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn find(&self, id: i32, language: &str) -> Result<Option<ProductModel>, DbErr> {
        let select = ProductEntity::find()
            .filter(Column::Id.eq(id))
            .filter(Column::Language.eq(language));

        ProductEntity::find()
            .from_raw_sql(select_from(&self.db, select, &self.table))
            .one(&self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_support::{memory_db, product, seed_products};

    #[tokio::test]
    async fn test_list_filters_language_and_orders() {
        let db = memory_db("charcuteria", "blog").await;
        seed_products(
            &db,
            "charcuteria",
            vec![
                product(1, "es", "Salchichón", "embutidos"),
                product(2, "es", "Jamón ibérico", "jamones"),
                product(3, "es", "Chorizo", "embutidos"),
                product(1, "en", "Salchichon", "cured sausages"),
            ],
        )
        .await;

        let repo = ProductRepository::new(db, "charcuteria");
        let names: Vec<_> = repo
            .list_by_language("es")
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(names, vec!["Chorizo", "Salchichón", "Jamón ibérico"]);
    }

    #[tokio::test]
    async fn test_list_unknown_language_is_empty() {
        let db = memory_db("charcuteria", "blog").await;
        seed_products(&db, "charcuteria", vec![product(1, "es", "Chorizo", "embutidos")]).await;

        let repo = ProductRepository::new(db, "charcuteria");
        assert!(repo.list_by_language("fr").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id_and_language() {
        let db = memory_db("charcuteria", "blog").await;
        seed_products(
            &db,
            "charcuteria",
            vec![
                product(7, "es", "Lomo", "embutidos"),
                product(7, "en", "Loin", "cured sausages"),
            ],
        )
        .await;

        let repo = ProductRepository::new(db, "charcuteria");
        let found = repo.find(7, "en").await.unwrap().unwrap();
        assert_eq!(found.name, "Loin");
        assert!(repo.find(7, "de").await.unwrap().is_none());
        assert!(repo.find(8, "es").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reads_configured_table() {
        let db = memory_db("charcuteria-local", "blog-local").await;
        seed_products(
            &db,
            "charcuteria-local",
            vec![product(1, "es", "Cecina", "embutidos")],
        )
        .await;

        let repo = ProductRepository::new(db, "charcuteria-local");
        let products = repo.list_by_language("es").await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Cecina");
    }
}
