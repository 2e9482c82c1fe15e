//! Blog post repository.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    sea_query::{Expr, Func, Order, SimpleExpr},
};

use crate::entities::posts::{Column, Entity as PostEntity, Model as PostModel};
use crate::table::select_from;

/// Read access to the blog post table.
#[derive(Debug, Clone)]
pub struct PostRepository {
    db: DatabaseConnection,
    table: String,
}

/// `COALESCE(updated_at, published_at)`: the last time a post changed.
fn last_changed() -> SimpleExpr {
    SimpleExpr::FunctionCall(Func::coalesce([
        Expr::col((PostEntity, Column::UpdatedAt)).into(),
        Expr::col((PostEntity, Column::PublishedAt)).into(),
    ]))
}

impl PostRepository {
    /// Creates a repository reading from `table`.
    #[must_use]
    pub fn new(db: DatabaseConnection, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
        }
    }

    /// Lists the posts in `language`, most recently changed first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_by_language(&self, language: &str) -> Result<Vec<PostModel>, DbErr> {
        let select = PostEntity::find()
            .filter(Column::Language.eq(language))
            .order_by(last_changed(), Order::Desc)
            .order_by_asc(Column::Id);

        PostEntity::find()
            .from_raw_sql(select_from(&self.db, select, &self.table))
            .all(&self.db)
            .await
    }

    /// Finds one post by id and language.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn find_by_id(&self, id: i32, language: &str) -> Result<Option<PostModel>, DbErr> {
        let select = PostEntity::find()
            .filter(Column::Id.eq(id))
            .filter(Column::Language.eq(language));

        PostEntity::find()
            .from_raw_sql(select_from(&self.db, select, &self.table))
            .one(&self.db)
            .await
    }

    /// Finds a post by slug.
    ///
    /// With a language, only that translation matches. Without one, the
    /// most recently changed translation wins, ties broken by language code.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn find_by_slug(
        &self,
        slug: &str,
        language: Option<&str>,
    ) -> Result<Option<PostModel>, DbErr> {
        let mut select = PostEntity::find().filter(Column::Slug.eq(slug));
        if let Some(language) = language {
            select = select.filter(Column::Language.eq(language));
        }
        let select = select
            .order_by(last_changed(), Order::Desc)
            .order_by_asc(Column::Language)
            .limit(1);

        PostEntity::find()
            .from_raw_sql(select_from(&self.db, select, &self.table))
            .one(&self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_support::{at, memory_db, post, seed_posts};

    #[tokio::test]
    async fn test_list_orders_by_last_change() {
        let db = memory_db("charcuteria", "blog").await;
        let mut edited = post(1, "es", "antiguo-editado", at(2024, 1, 1));
        edited.updated_at = Some(at(2024, 6, 1).naive_utc());
        seed_posts(
            &db,
            "blog",
            vec![
                edited,
                post(2, "es", "reciente", at(2024, 3, 1)),
                post(3, "es", "viejo", at(2023, 12, 1)),
                post(2, "en", "recent", at(2024, 3, 1)),
            ],
        )
        .await;

        let repo = PostRepository::new(db, "blog");
        let slugs: Vec<_> = repo
            .list_by_language("es")
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.slug)
            .collect();

        assert_eq!(slugs, vec!["antiguo-editado", "reciente", "viejo"]);
    }

    #[tokio::test]
    async fn test_find_by_id_requires_language_match() {
        let db = memory_db("charcuteria", "blog").await;
        seed_posts(&db, "blog", vec![post(4, "es", "jamon", at(2024, 2, 2))]).await;

        let repo = PostRepository::new(db, "blog");
        assert_eq!(
            repo.find_by_id(4, "es").await.unwrap().unwrap().slug,
            "jamon"
        );
        assert!(repo.find_by_id(4, "en").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_slug_with_language() {
        let db = memory_db("charcuteria", "blog").await;
        seed_posts(
            &db,
            "blog",
            vec![
                post(5, "es", "feria", at(2024, 5, 1)),
                post(5, "en", "feria", at(2024, 5, 2)),
            ],
        )
        .await;

        let repo = PostRepository::new(db, "blog");
        let found = repo.find_by_slug("feria", Some("es")).await.unwrap().unwrap();
        assert_eq!(found.language, "es");
        assert!(repo.find_by_slug("feria", Some("fr")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_slug_without_language_picks_latest() {
        let db = memory_db("charcuteria", "blog").await;
        seed_posts(
            &db,
            "blog",
            vec![
                post(5, "es", "feria", at(2024, 5, 1)),
                post(5, "en", "feria", at(2024, 5, 2)),
            ],
        )
        .await;

        let repo = PostRepository::new(db, "blog");
        let found = repo.find_by_slug("feria", None).await.unwrap().unwrap();
        assert_eq!(found.language, "en");
        assert!(repo.find_by_slug("nada", None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_slug_tie_breaks_on_language() {
        let db = memory_db("charcuteria", "blog").await;
        seed_posts(
            &db,
            "blog",
            vec![
                post(6, "es", "cata", at(2024, 5, 1)),
                post(6, "en", "cata", at(2024, 5, 1)),
            ],
        )
        .await;

        let repo = PostRepository::new(db, "blog");
        let found = repo.find_by_slug("cata", None).await.unwrap().unwrap();
        assert_eq!(found.language, "en");
    }
}
