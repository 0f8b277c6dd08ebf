//! Persistence port for the catalog, cart and favorites collections.
//!
//! Services only talk to [`CatalogStore`]; [`PgStore`] backs it with
//! PostgreSQL and [`MemoryStore`] keeps everything in process for tests and
//! local experiments.
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Cart, CartLine, Favorites, Product, ProductFields, UpdateCounts, User};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("orm error: {0}")]
    Orm(#[from] sea_orm::DbErr),

    #[error("product {0} is not stored as a JSON object")]
    MalformedDocument(Uuid),

    #[error("{0} vanished during creation")]
    Vanished(&'static str),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Result of lazily creating a per-user list together with its first entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListInsert {
    pub list_id: Uuid,
    /// False when a concurrent request created the list and already holds the entry.
    pub inserted: bool,
}

#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn insert_product(&self, fields: ProductFields) -> StoreResult<Product>;
    async fn list_products(&self) -> StoreResult<Vec<Product>>;
    async fn find_product(&self, id: Uuid) -> StoreResult<Option<Product>>;
    /// Merge `fields` into the stored document.
    async fn set_product_fields(&self, id: Uuid, fields: ProductFields)
    -> StoreResult<UpdateCounts>;

    /// Returns `None` when the email is already registered.
    async fn insert_user(&self, email: &str) -> StoreResult<Option<User>>;
    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>>;

    /// Create the user's cart holding `line` and link it from the user.
    async fn create_cart(&self, user_id: Uuid, line: CartLine) -> StoreResult<ListInsert>;
    async fn find_cart(&self, id: Uuid) -> StoreResult<Option<Cart>>;
    /// Append a line; returns false if the product is already in the cart.
    async fn push_cart_line(&self, cart_id: Uuid, line: CartLine) -> StoreResult<bool>;
    async fn set_cart_quantity(
        &self,
        cart_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> StoreResult<UpdateCounts>;
    async fn pull_cart_line(&self, cart_id: Uuid, product_id: Uuid) -> StoreResult<UpdateCounts>;

    /// Create the user's favorites list holding `product_id` and link it from the user.
    async fn create_favorites(&self, user_id: Uuid, product_id: Uuid) -> StoreResult<ListInsert>;
    async fn find_favorites(&self, id: Uuid) -> StoreResult<Option<Favorites>>;
    /// Returns false if the product is already a favorite.
    async fn push_favorite(&self, favorites_id: Uuid, product_id: Uuid) -> StoreResult<bool>;
    /// Returns false if the product was not a favorite.
    async fn pull_favorite(&self, favorites_id: Uuid, product_id: Uuid) -> StoreResult<bool>;
}
