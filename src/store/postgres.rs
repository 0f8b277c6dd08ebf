use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
    ActiveValue::NotSet,
    sea_query::{Expr, OnConflict},
};
use serde_json::Value;
use sqlx::types::Json;
use uuid::Uuid;

use crate::{
    db::{DbPool, OrmConn, orm_from_pool},
    entity::{
        CartItems, Carts, FavoriteItems, Favorites as FavoriteLists, Products, Users,
        cart_items, carts, favorite_items, favorites, products, users,
    },
    models::{Cart, CartLine, Favorites, Product, ProductFields, UpdateCounts, User},
};

use super::{CatalogStore, ListInsert, StoreError, StoreResult};

/// PostgreSQL-backed store. Entity reads and the lazy list creation go
/// through SeaORM; the single-statement list mutations use sqlx directly.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
    orm: OrmConn,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        let orm = orm_from_pool(&pool);
        Self { pool, orm }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    async fn link_user(
        txn: &DatabaseTransaction,
        user_id: Uuid,
        column: users::Column,
        list_id: Uuid,
    ) -> StoreResult<()> {
        Users::update_many()
            .col_expr(column, Expr::value(list_id))
            .filter(users::Column::Id.eq(user_id))
            .exec(txn)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for PgStore {
    async fn insert_product(&self, fields: ProductFields) -> StoreResult<Product> {
        let active = products::ActiveModel {
            id: Set(Uuid::new_v4()),
            document: Set(Value::Object(fields)),
            created_at: NotSet,
        };
        let model = active.insert(&self.orm).await?;
        product_from_entity(model)
    }

    async fn list_products(&self) -> StoreResult<Vec<Product>> {
        Products::find()
            .order_by_asc(products::Column::CreatedAt)
            .order_by_asc(products::Column::Id)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(product_from_entity)
            .collect()
    }

    async fn find_product(&self, id: Uuid) -> StoreResult<Option<Product>> {
        Products::find_by_id(id)
            .one(&self.orm)
            .await?
            .map(product_from_entity)
            .transpose()
    }

    async fn set_product_fields(
        &self,
        id: Uuid,
        fields: ProductFields,
    ) -> StoreResult<UpdateCounts> {
        let (matched, modified): (i64, i64) = sqlx::query_as(
            r#"
            WITH target AS (
                SELECT id, document FROM products WHERE id = $1
            ),
            updated AS (
                UPDATE products p
                SET document = p.document || $2
                FROM target t
                WHERE p.id = t.id AND (t.document || $2) IS DISTINCT FROM t.document
                RETURNING p.id
            )
            SELECT (SELECT COUNT(*) FROM target), (SELECT COUNT(*) FROM updated)
            "#,
        )
        .bind(id)
        .bind(Json(&fields))
        .fetch_one(&self.pool)
        .await?;

        Ok(UpdateCounts::new(matched as u64, modified as u64))
    }

    async fn insert_user(&self, email: &str) -> StoreResult<Option<User>> {
        let id = Uuid::new_v4();
        let active = users::ActiveModel {
            id: Set(id),
            email: Set(email.to_string()),
            cart_id: Set(None),
            favorites_id: Set(None),
            created_at: NotSet,
        };
        let inserted = Users::insert(active)
            .on_conflict(
                OnConflict::column(users::Column::Email)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.orm)
            .await?;
        if inserted == 0 {
            return Ok(None);
        }
        self.find_user(id).await
    }

    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        let user = Users::find_by_id(id)
            .one(&self.orm)
            .await?
            .map(user_from_entity);
        Ok(user)
    }

    async fn create_cart(&self, user_id: Uuid, line: CartLine) -> StoreResult<ListInsert> {
        let txn = self.orm.begin().await?;

        // A concurrent first add may win the unique user_id; reuse its cart.
        let candidate = carts::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            created_at: NotSet,
        };
        Carts::insert(candidate)
            .on_conflict(
                OnConflict::column(carts::Column::UserId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
        let cart = Carts::find()
            .filter(carts::Column::UserId.eq(user_id))
            .one(&txn)
            .await?
            .ok_or(StoreError::Vanished("cart"))?;

        let item = cart_items::ActiveModel {
            cart_id: Set(cart.id),
            product_id: Set(line.product_id),
            quantity: Set(line.quantity),
            position: NotSet,
        };
        let inserted = CartItems::insert(item)
            .on_conflict(
                OnConflict::columns([cart_items::Column::CartId, cart_items::Column::ProductId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;

        Self::link_user(&txn, user_id, users::Column::CartId, cart.id).await?;
        txn.commit().await?;

        Ok(ListInsert {
            list_id: cart.id,
            inserted: inserted == 1,
        })
    }

    async fn find_cart(&self, id: Uuid) -> StoreResult<Option<Cart>> {
        let Some(cart) = Carts::find_by_id(id).one(&self.orm).await? else {
            return Ok(None);
        };
        let items = CartItems::find()
            .filter(cart_items::Column::CartId.eq(cart.id))
            .order_by_asc(cart_items::Column::Position)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(|item| CartLine {
                product_id: item.product_id,
                quantity: item.quantity,
            })
            .collect();

        Ok(Some(Cart {
            id: cart.id,
            user_id: cart.user_id,
            items,
        }))
    }

    async fn push_cart_line(&self, cart_id: Uuid, line: CartLine) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO cart_items (cart_id, product_id, quantity)
            VALUES ($1, $2, $3)
            ON CONFLICT (cart_id, product_id) DO NOTHING
            "#,
        )
        .bind(cart_id)
        .bind(line.product_id)
        .bind(line.quantity)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn set_cart_quantity(
        &self,
        cart_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> StoreResult<UpdateCounts> {
        let (matched, modified): (i64, i64) = sqlx::query_as(
            r#"
            WITH target AS (
                SELECT id FROM carts WHERE id = $1
            ),
            updated AS (
                UPDATE cart_items
                SET quantity = $3
                WHERE cart_id = $1 AND product_id = $2 AND quantity <> $3
                RETURNING product_id
            )
            SELECT (SELECT COUNT(*) FROM target), (SELECT COUNT(*) FROM updated)
            "#,
        )
        .bind(cart_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_one(&self.pool)
        .await?;

        Ok(UpdateCounts::new(matched as u64, modified as u64))
    }

    async fn pull_cart_line(&self, cart_id: Uuid, product_id: Uuid) -> StoreResult<UpdateCounts> {
        let (matched, modified): (i64, i64) = sqlx::query_as(
            r#"
            WITH target AS (
                SELECT id FROM carts WHERE id = $1
            ),
            removed AS (
                DELETE FROM cart_items
                WHERE cart_id = $1 AND product_id = $2
                RETURNING product_id
            )
            SELECT (SELECT COUNT(*) FROM target), (SELECT COUNT(*) FROM removed)
            "#,
        )
        .bind(cart_id)
        .bind(product_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(UpdateCounts::new(matched as u64, modified as u64))
    }

    async fn create_favorites(&self, user_id: Uuid, product_id: Uuid) -> StoreResult<ListInsert> {
        let txn = self.orm.begin().await?;

        let candidate = favorites::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            created_at: NotSet,
        };
        FavoriteLists::insert(candidate)
            .on_conflict(
                OnConflict::column(favorites::Column::UserId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
        let list = FavoriteLists::find()
            .filter(favorites::Column::UserId.eq(user_id))
            .one(&txn)
            .await?
            .ok_or(StoreError::Vanished("favorites"))?;

        let item = favorite_items::ActiveModel {
            favorites_id: Set(list.id),
            product_id: Set(product_id),
            position: NotSet,
        };
        let inserted = FavoriteItems::insert(item)
            .on_conflict(
                OnConflict::columns([
                    favorite_items::Column::FavoritesId,
                    favorite_items::Column::ProductId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;

        Self::link_user(&txn, user_id, users::Column::FavoritesId, list.id).await?;
        txn.commit().await?;

        Ok(ListInsert {
            list_id: list.id,
            inserted: inserted == 1,
        })
    }

    async fn find_favorites(&self, id: Uuid) -> StoreResult<Option<Favorites>> {
        let Some(list) = FavoriteLists::find_by_id(id).one(&self.orm).await? else {
            return Ok(None);
        };
        let product_ids = FavoriteItems::find()
            .filter(favorite_items::Column::FavoritesId.eq(list.id))
            .order_by_asc(favorite_items::Column::Position)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(|item| item.product_id)
            .collect();

        Ok(Some(Favorites {
            id: list.id,
            user_id: list.user_id,
            product_ids,
        }))
    }

    async fn push_favorite(&self, favorites_id: Uuid, product_id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO favorite_items (favorites_id, product_id)
            VALUES ($1, $2)
            ON CONFLICT (favorites_id, product_id) DO NOTHING
            "#,
        )
        .bind(favorites_id)
        .bind(product_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn pull_favorite(&self, favorites_id: Uuid, product_id: Uuid) -> StoreResult<bool> {
        let result =
            sqlx::query("DELETE FROM favorite_items WHERE favorites_id = $1 AND product_id = $2")
                .bind(favorites_id)
                .bind(product_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() == 1)
    }
}

fn product_from_entity(model: products::Model) -> StoreResult<Product> {
    match model.document {
        Value::Object(fields) => Ok(Product {
            id: model.id,
            fields,
        }),
        _ => Err(StoreError::MalformedDocument(model.id)),
    }
}

fn user_from_entity(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        cart_id: model.cart_id,
        favorites_id: model.favorites_id,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
