use catalog_cart_api::{
    config::AppConfig,
    db::{create_pool, run_migrations},
    store::{CatalogStore, PgStore},
};
use serde_json::{Value, json};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, config.max_connections).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;

    let store = PgStore::new(pool);
    let user_id = ensure_user(&store, "reader@example.com").await?;
    seed_products(&store).await?;

    println!("Seed completed. User ID: {user_id}");
    Ok(())
}

async fn ensure_user(store: &PgStore, email: &str) -> anyhow::Result<Uuid> {
    if let Some(user) = store.insert_user(email).await? {
        println!("Created user {email}");
        return Ok(user.id);
    }

    // Already registered; look the id up directly.
    let existing: (Uuid,) = sqlx::query_as("SELECT id FROM users WHERE email = $1")
        .bind(email)
        .fetch_one(store.pool())
        .await?;
    println!("User {email} already exists");
    Ok(existing.0)
}

async fn seed_products(store: &PgStore) -> anyhow::Result<()> {
    let books = vec![
        json!({
            "name": "The Rust Programming Language",
            "language": "English",
            "category": "Programming",
            "condiction": "Like new",
            "author": "Steve Klabnik, Carol Nichols",
            "publisher": "No Starch Press",
            "publishDate": "2023-02-28",
            "ISBN": 9781718503106_i64,
            "price": 1200,
            "description": "The official book on Rust",
        }),
        json!({
            "name": "Rust for Rustaceans",
            "language": "English",
            "category": "Programming",
            "condiction": "Good",
            "author": "Jon Gjengset",
            "publisher": "No Starch Press",
            "publishDate": "2021-12-14",
            "ISBN": 9781718501850_i64,
            "price": 980,
            "description": "Idiomatic programming for experienced developers",
        }),
        json!({
            "name": "Zero To Production In Rust",
            "language": "English",
            "category": "Backend",
            "condiction": "Used",
            "author": "Luca Palmieri",
            "publisher": "Self-published",
            "publishDate": "2022-05-01",
            "ISBN": 9798830582845_i64,
            "price": 750,
            "description": "An opinionated introduction to backend development in Rust",
        }),
    ];

    for book in books {
        let Value::Object(fields) = book else {
            continue;
        };
        // Products carry no unique key, so skip titles that are already present.
        let exists: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM products WHERE document->>'name' = $1")
                .bind(fields.get("name").and_then(Value::as_str).unwrap_or_default())
                .fetch_optional(store.pool())
                .await?;
        if exists.is_some() {
            continue;
        }
        store.insert_product(fields).await?;
    }

    println!("Seeded products");
    Ok(())
}
