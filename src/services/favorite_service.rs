use serde_json::Value;
use uuid::Uuid;

use crate::{
    dto::{favorites::FavoriteRequest, params::UserQuery},
    error::{AppError, AppResult},
    response::{ApiResponse, empty_body},
    store::CatalogStore,
};

use super::{DUPLICATE_ITEM, require_product, require_user};

const NO_FAVORITES_LINK: &str = "使用者沒有favorites_id(沒有收藏資料)";
const FAVORITES_MISSING: &str = "找不到使用者的收藏資料";

pub async fn add_favorite(
    store: &dyn CatalogStore,
    payload: FavoriteRequest,
) -> AppResult<ApiResponse<Value>> {
    let input = payload.validate("需要提供user_id 跟 product_id")?;
    let user = require_user(store, input.user_id).await?;
    require_product(store, input.product_id).await?;

    match user.favorites_id {
        None => {
            let created = store.create_favorites(user.id, input.product_id).await?;
            if !created.inserted {
                return Err(AppError::bad_request(DUPLICATE_ITEM));
            }
            tracing::info!(user_id = %user.id, favorites_id = %created.list_id, "favorites created");
        }
        Some(favorites_id) => {
            if store.find_favorites(favorites_id).await?.is_none() {
                return Err(AppError::bad_request(FAVORITES_MISSING));
            }
            if !store.push_favorite(favorites_id, input.product_id).await? {
                return Err(AppError::bad_request(DUPLICATE_ITEM));
            }
        }
    }

    Ok(ApiResponse::success("商品成功加到收藏", empty_body()))
}

pub async fn remove_favorite(
    store: &dyn CatalogStore,
    payload: FavoriteRequest,
) -> AppResult<ApiResponse<Value>> {
    let input = payload.validate("需要提供user_id, product_id")?;
    let user = require_user(store, input.user_id).await?;
    require_product(store, input.product_id).await?;

    let favorites_id = user
        .favorites_id
        .ok_or_else(|| AppError::not_found(NO_FAVORITES_LINK))?;
    if store.find_favorites(favorites_id).await?.is_none() {
        return Err(AppError::not_found(FAVORITES_MISSING));
    }
    if !store.pull_favorite(favorites_id, input.product_id).await? {
        return Err(AppError::not_found("收藏中沒有該商品"));
    }

    tracing::debug!(%favorites_id, product_id = %input.product_id, "favorite removed");
    Ok(ApiResponse::success("成功刪除該收藏商品", empty_body()))
}

pub async fn get_favorites(
    store: &dyn CatalogStore,
    query: UserQuery,
) -> AppResult<ApiResponse<Vec<Uuid>>> {
    let user_id = query.validate()?;
    let user = require_user(store, user_id).await?;
    let favorites_id = user
        .favorites_id
        .ok_or_else(|| AppError::not_found(NO_FAVORITES_LINK))?;
    let favorites = store
        .find_favorites(favorites_id)
        .await?
        .ok_or_else(|| AppError::not_found(FAVORITES_MISSING))?;

    Ok(ApiResponse::success(
        "成功取得該使用者收藏的所有product_id資料",
        favorites.product_ids,
    ))
}
