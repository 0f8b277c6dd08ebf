use serde_json::Value;
use uuid::Uuid;

use crate::{
    dto::{
        cart::{AddToCartRequest, UpdateCartRequest},
        params::UserQuery,
    },
    error::{AppError, AppResult},
    models::{CartLine, UpdateCounts},
    response::{ApiResponse, empty_body},
    store::CatalogStore,
};

use super::{DUPLICATE_ITEM, require_product, require_user};

/// Add a product to the user's cart, creating the cart on first use.
pub async fn add_to_cart(
    store: &dyn CatalogStore,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<Value>> {
    let input = payload.validate()?;
    let user = require_user(store, input.user_id).await?;
    require_product(store, input.product_id).await?;

    let line = CartLine {
        product_id: input.product_id,
        quantity: input.quantity,
    };

    match user.cart_id {
        None => {
            let created = store.create_cart(user.id, line).await?;
            if !created.inserted {
                return Err(AppError::bad_request(DUPLICATE_ITEM));
            }
            tracing::info!(user_id = %user.id, cart_id = %created.list_id, "cart created");
        }
        Some(cart_id) => {
            if store.find_cart(cart_id).await?.is_none() {
                return Err(AppError::not_found("無法找到購物車資料"));
            }
            if !store.push_cart_line(cart_id, line).await? {
                return Err(AppError::bad_request(DUPLICATE_ITEM));
            }
        }
    }

    Ok(ApiResponse::success("商品成功新增到購物車", empty_body()))
}

/// Set a line's quantity; quantity 0 removes the line.
pub async fn update_cart_item(
    store: &dyn CatalogStore,
    payload: UpdateCartRequest,
) -> AppResult<ApiResponse<UpdateCounts>> {
    let input = payload.validate()?;
    let user = require_user(store, input.user_id).await?;
    require_product(store, input.product_id).await?;

    let cart_id = user
        .cart_id
        .ok_or_else(|| AppError::not_found("沒有cart_id(沒有購物車資料)"))?;
    if store.find_cart(cart_id).await?.is_none() {
        return Err(AppError::not_found("沒有該購物車資料"));
    }

    let counts = if input.quantity == 0 {
        let counts = store.pull_cart_line(cart_id, input.product_id).await?;
        tracing::debug!(%cart_id, product_id = %input.product_id, "cart line removed");
        counts
    } else {
        store
            .set_cart_quantity(cart_id, input.product_id, input.quantity)
            .await?
    };

    Ok(ApiResponse::success("已更新該購物車商品數量資料", counts))
}

/// Product ids in the user's cart, in the order they were added.
pub async fn get_cart(
    store: &dyn CatalogStore,
    query: UserQuery,
) -> AppResult<ApiResponse<Vec<Uuid>>> {
    let user_id = query.validate()?;
    let user = require_user(store, user_id).await?;
    let cart_id = user
        .cart_id
        .ok_or_else(|| AppError::not_found("使用者沒有cart_id(沒有購物車資料)"))?;
    let cart = store
        .find_cart(cart_id)
        .await?
        .ok_or_else(|| AppError::not_found("沒有該購物車資料"))?;

    Ok(ApiResponse::success(
        "成功取得該使用者購物車的所有product_id資料",
        cart.product_ids(),
    ))
}
