//! In-memory `SQLite` fixtures for repository tests.

use chrono::{TimeZone, Utc};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, IntoActiveModel};

use crate::entities::{posts, products};
use crate::schema::ensure_schema;
use crate::table::{TableNames, insert_into};

pub(crate) async fn memory_db(products: &str, posts: &str) -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);
    let db = Database::connect(options).await.unwrap();

    let tables = TableNames {
        products: products.to_string(),
        posts: posts.to_string(),
    };
    ensure_schema(&db, &tables).await.unwrap();
    db
}

pub(crate) fn at(year: i32, month: u32, day: u32) -> sea_orm::prelude::DateTimeWithTimeZone {
    Utc.with_ymd_and_hms(year, month, day, 10, 0, 0)
        .unwrap()
        .fixed_offset()
}

pub(crate) fn product(id: i32, language: &str, name: &str, category: &str) -> products::Model {
    products::Model {
        id,
        language: language.to_string(),
        name: name.to_string(),
        company: None,
        description: format!("{name} de bellota"),
        image_url: format!("/img/{id}.jpg"),
        category: category.to_string(),
        created_at: at(2024, 1, 1),
    }
}

pub(crate) fn post(
    id: i32,
    language: &str,
    slug: &str,
    published_at: sea_orm::prelude::DateTimeWithTimeZone,
) -> posts::Model {
    posts::Model {
        id,
        language: language.to_string(),
        slug: slug.to_string(),
        title: slug.replace('-', " "),
        body: "Contenido".to_string(),
        author: "Redacción".to_string(),
        image_url: format!("/blog/{id}.jpg"),
        image_url_2: None,
        published_at: published_at.naive_utc(),
        updated_at: None,
    }
}

pub(crate) async fn seed_products(db: &DatabaseConnection, table: &str, rows: Vec<products::Model>) {
    for row in rows {
        insert_into(db, table, row.into_active_model()).await.unwrap();
    }
}

pub(crate) async fn seed_posts(db: &DatabaseConnection, table: &str, rows: Vec<posts::Model>) {
    for row in rows {
        insert_into(db, table, row.into_active_model()).await.unwrap();
    }
}
