//! Database seeder for Paraíso development and testing.
//!
//! Creates the product and blog tables if needed and fills them with a few
//! Spanish and English rows. Rows that already exist are left alone.
//!
//! Usage: cargo run --bin seeder

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use sea_orm::{DatabaseConnection, IntoActiveModel};

use paraiso_db::entities::{posts, products};
use paraiso_db::{PostRepository, ProductRepository, TableNames, ensure_schema, insert_into};
use paraiso_shared::AppConfig;

/// (id, language, name, company, description, category)
const PRODUCTS: &[(i32, &str, &str, Option<&str>, &str, &str)] = &[
    (
        1,
        "es",
        "Jamón ibérico de bellota",
        Some("Paraíso Del Jamón"),
        "Curación mínima de 36 meses en bodega natural.",
        "jamones",
    ),
    (
        1,
        "en",
        "Acorn-fed Iberian ham",
        Some("Paraíso Del Jamón"),
        "Cured for at least 36 months in a natural cellar.",
        "hams",
    ),
    (
        2,
        "es",
        "Chorizo ibérico",
        None,
        "Embutido de pimentón de la Vera.",
        "embutidos",
    ),
    (
        2,
        "en",
        "Iberian chorizo",
        None,
        "Sausage seasoned with La Vera paprika.",
        "cured sausages",
    ),
    (
        3,
        "es",
        "Salchichón ibérico",
        None,
        "Embutido con pimienta negra en grano.",
        "embutidos",
    ),
    (
        3,
        "en",
        "Iberian salchichón",
        None,
        "Sausage with whole black peppercorns.",
        "cured sausages",
    ),
];

/// (id, language, slug, title, body)
const POSTS: &[(i32, &str, &str, &str, &str)] = &[
    (
        1,
        "es",
        "como-cortar-jamon",
        "Cómo cortar jamón",
        "<p>Lonchas finas, cuchillo largo y paciencia.</p>",
    ),
    (
        1,
        "en",
        "how-to-carve-ham",
        "How to carve ham",
        "<p>Thin slices, a long knife and patience.</p>",
    ),
    (
        2,
        "es",
        "montanera",
        "La montanera",
        "<p>De octubre a marzo el cerdo ibérico se alimenta de bellotas.</p>",
    ),
    (
        2,
        "en",
        "montanera",
        "The montanera season",
        "<p>From October to March Iberian pigs feed on acorns.</p>",
    ),
];

fn seeded_at() -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0)
        .single()
        .unwrap_or_default()
        .fixed_offset()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    let tables = TableNames::from_config(&config.database);

    println!("Connecting to database...");
    let db = paraiso_db::connect(&config.database).await?;

    println!("Ensuring tables {} and {}...", tables.products, tables.posts);
    ensure_schema(&db, &tables).await?;

    println!("Seeding products...");
    seed_products(&db, &tables.products).await?;

    println!("Seeding blog posts...");
    seed_posts(&db, &tables.posts).await?;

    println!("Seeding complete!");
    Ok(())
}

/// Seeds demo products.
async fn seed_products(db: &DatabaseConnection, table: &str) -> anyhow::Result<()> {
    let repo = ProductRepository::new(db.clone(), table);

    for &(id, language, name, company, description, category) in PRODUCTS {
        if repo.find(id, language).await?.is_some() {
            println!("  Product {id}/{language} already exists, skipping...");
            continue;
        }

        let product = products::Model {
            id,
            language: language.to_string(),
            name: name.to_string(),
            company: company.map(str::to_string),
            description: description.to_string(),
            image_url: format!("/images/charcuteria/{id}.jpg"),
            category: category.to_string(),
            created_at: seeded_at(),
        };
        insert_into(db, table, product.into_active_model()).await?;
        println!("  Created product {id}/{language}: {name}");
    }

    Ok(())
}

/// Seeds demo blog posts.
async fn seed_posts(db: &DatabaseConnection, table: &str) -> anyhow::Result<()> {
    let repo = PostRepository::new(db.clone(), table);

    for &(id, language, slug, title, body) in POSTS {
        if repo.find_by_id(id, language).await?.is_some() {
            println!("  Post {id}/{language} already exists, skipping...");
            continue;
        }

        let post = posts::Model {
            id,
            language: language.to_string(),
            slug: slug.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            author: "Paraíso Del Jamón".to_string(),
            image_url: format!("/images/blog/{id}.jpg"),
            image_url_2: None,
            published_at: seeded_at().naive_utc(),
            updated_at: None,
        };
        insert_into(db, table, post.into_active_model()).await?;
        println!("  Created post {id}/{language}: {slug}");
    }

    Ok(())
}
