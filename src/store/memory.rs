use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::{Cart, CartLine, Favorites, Product, ProductFields, UpdateCounts, User};

use super::{CatalogStore, ListInsert, StoreResult};

#[derive(Default)]
struct Collections {
    // Insertion order doubles as creation order.
    products: Vec<Product>,
    users: HashMap<Uuid, User>,
    carts: HashMap<Uuid, Cart>,
    favorites: HashMap<Uuid, Favorites>,
}

impl Collections {
    fn product_mut(&mut self, id: Uuid) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }
}

/// In-process store. Every operation holds one lock, so each call is atomic
/// the same way the single-statement PostgreSQL mutations are.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cart documents held, across all users.
    pub async fn cart_count(&self) -> usize {
        self.inner.lock().await.carts.len()
    }

    /// Number of favorites documents held, across all users.
    pub async fn favorites_count(&self) -> usize {
        self.inner.lock().await.favorites.len()
    }

    /// Delete a cart document while leaving the user's link in place.
    pub async fn drop_cart(&self, id: Uuid) -> bool {
        self.inner.lock().await.carts.remove(&id).is_some()
    }

    /// Delete a favorites document while leaving the user's link in place.
    pub async fn drop_favorites(&self, id: Uuid) -> bool {
        self.inner.lock().await.favorites.remove(&id).is_some()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn insert_product(&self, fields: ProductFields) -> StoreResult<Product> {
        let product = Product {
            id: Uuid::new_v4(),
            fields,
        };
        self.inner.lock().await.products.push(product.clone());
        Ok(product)
    }

    async fn list_products(&self) -> StoreResult<Vec<Product>> {
        Ok(self.inner.lock().await.products.clone())
    }

    async fn find_product(&self, id: Uuid) -> StoreResult<Option<Product>> {
        let inner = self.inner.lock().await;
        Ok(inner.products.iter().find(|p| p.id == id).cloned())
    }

    async fn set_product_fields(
        &self,
        id: Uuid,
        fields: ProductFields,
    ) -> StoreResult<UpdateCounts> {
        let mut inner = self.inner.lock().await;
        let Some(product) = inner.product_mut(id) else {
            return Ok(UpdateCounts::default());
        };

        let mut modified = false;
        for (key, value) in fields {
            let previous: Option<Value> = product.fields.insert(key, value.clone());
            if previous.as_ref() != Some(&value) {
                modified = true;
            }
        }
        Ok(UpdateCounts::new(1, u64::from(modified)))
    }

    async fn insert_user(&self, email: &str) -> StoreResult<Option<User>> {
        let mut inner = self.inner.lock().await;
        if inner.users.values().any(|u| u.email == email) {
            return Ok(None);
        }
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            cart_id: None,
            favorites_id: None,
            created_at: Utc::now(),
        };
        inner.users.insert(user.id, user.clone());
        Ok(Some(user))
    }

    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.inner.lock().await.users.get(&id).cloned())
    }

    async fn create_cart(&self, user_id: Uuid, line: CartLine) -> StoreResult<ListInsert> {
        let mut inner = self.inner.lock().await;
        let existing = inner
            .carts
            .values()
            .find(|cart| cart.user_id == user_id)
            .map(|cart| cart.id);

        let list_id = existing.unwrap_or_else(Uuid::new_v4);
        let cart = inner.carts.entry(list_id).or_insert_with(|| Cart {
            id: list_id,
            user_id,
            items: Vec::new(),
        });
        let inserted = !cart.contains(line.product_id);
        if inserted {
            cart.items.push(line);
        }

        if let Some(user) = inner.users.get_mut(&user_id) {
            user.cart_id = Some(list_id);
        }
        Ok(ListInsert { list_id, inserted })
    }

    async fn find_cart(&self, id: Uuid) -> StoreResult<Option<Cart>> {
        Ok(self.inner.lock().await.carts.get(&id).cloned())
    }

    async fn push_cart_line(&self, cart_id: Uuid, line: CartLine) -> StoreResult<bool> {
        let mut inner = self.inner.lock().await;
        let Some(cart) = inner.carts.get_mut(&cart_id) else {
            return Ok(false);
        };
        if cart.contains(line.product_id) {
            return Ok(false);
        }
        cart.items.push(line);
        Ok(true)
    }

    async fn set_cart_quantity(
        &self,
        cart_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> StoreResult<UpdateCounts> {
        let mut inner = self.inner.lock().await;
        let Some(cart) = inner.carts.get_mut(&cart_id) else {
            return Ok(UpdateCounts::default());
        };
        let modified = match cart
            .items
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                1
            }
            _ => 0,
        };
        Ok(UpdateCounts::new(1, modified))
    }

    async fn pull_cart_line(&self, cart_id: Uuid, product_id: Uuid) -> StoreResult<UpdateCounts> {
        let mut inner = self.inner.lock().await;
        let Some(cart) = inner.carts.get_mut(&cart_id) else {
            return Ok(UpdateCounts::default());
        };
        let before = cart.items.len();
        cart.items.retain(|line| line.product_id != product_id);
        let removed = (before - cart.items.len()) as u64;
        Ok(UpdateCounts::new(1, removed))
    }

    async fn create_favorites(&self, user_id: Uuid, product_id: Uuid) -> StoreResult<ListInsert> {
        let mut inner = self.inner.lock().await;
        let existing = inner
            .favorites
            .values()
            .find(|list| list.user_id == user_id)
            .map(|list| list.id);

        let list_id = existing.unwrap_or_else(Uuid::new_v4);
        let list = inner.favorites.entry(list_id).or_insert_with(|| Favorites {
            id: list_id,
            user_id,
            product_ids: Vec::new(),
        });
        let inserted = !list.product_ids.contains(&product_id);
        if inserted {
            list.product_ids.push(product_id);
        }

        if let Some(user) = inner.users.get_mut(&user_id) {
            user.favorites_id = Some(list_id);
        }
        Ok(ListInsert { list_id, inserted })
    }

    async fn find_favorites(&self, id: Uuid) -> StoreResult<Option<Favorites>> {
        Ok(self.inner.lock().await.favorites.get(&id).cloned())
    }

    async fn push_favorite(&self, favorites_id: Uuid, product_id: Uuid) -> StoreResult<bool> {
        let mut inner = self.inner.lock().await;
        let Some(list) = inner.favorites.get_mut(&favorites_id) else {
            return Ok(false);
        };
        if list.product_ids.contains(&product_id) {
            return Ok(false);
        }
        list.product_ids.push(product_id);
        Ok(true)
    }

    async fn pull_favorite(&self, favorites_id: Uuid, product_id: Uuid) -> StoreResult<bool> {
        let mut inner = self.inner.lock().await;
        let Some(list) = inner.favorites.get_mut(&favorites_id) else {
            return Ok(false);
        };
        let before = list.product_ids.len();
        list.product_ids.retain(|id| *id != product_id);
        Ok(list.product_ids.len() != before)
    }
}
