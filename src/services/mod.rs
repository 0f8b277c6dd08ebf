use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Product, User},
    store::CatalogStore,
};

pub mod cart_service;
pub mod favorite_service;
pub mod product_service;
pub mod user_service;

pub(crate) const USER_NOT_FOUND: &str = "沒有該使用者";
pub(crate) const PRODUCT_NOT_FOUND: &str = "沒有該商品";
pub(crate) const DUPLICATE_ITEM: &str = "商品重複加入";

pub(crate) async fn require_user(store: &dyn CatalogStore, id: Uuid) -> AppResult<User> {
    store
        .find_user(id)
        .await?
        .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))
}

pub(crate) async fn require_product(store: &dyn CatalogStore, id: Uuid) -> AppResult<Product> {
    store
        .find_product(id)
        .await?
        .ok_or_else(|| AppError::not_found(PRODUCT_NOT_FOUND))
}
