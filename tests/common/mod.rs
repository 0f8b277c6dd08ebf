#![allow(dead_code)]

use catalog_cart_api::{
    dto::products::ProductDocument,
    store::{CatalogStore, MemoryStore},
};
use serde_json::{Value, json};
use uuid::Uuid;

pub fn book(name: &str) -> ProductDocument {
    serde_json::from_value(json!({
        "name": name,
        "author": "Ferris",
        "language": "English",
        "price": 450,
    }))
    .expect("book document")
}

pub async fn create_user(store: &MemoryStore, email: &str) -> Uuid {
    store
        .insert_user(email)
        .await
        .expect("insert user")
        .expect("fresh email")
        .id
}

pub async fn create_product(store: &MemoryStore, name: &str) -> Uuid {
    let Value::Object(fields) = json!({ "name": name, "price": 300 }) else {
        unreachable!()
    };
    store.insert_product(fields).await.expect("insert product").id
}

/// A store holding one user and one product.
pub async fn seeded() -> (MemoryStore, Uuid, Uuid) {
    let store = MemoryStore::new();
    let user_id = create_user(&store, "reader@example.com").await;
    let product_id = create_product(&store, "Rust in Action").await;
    (store, user_id, product_id)
}
