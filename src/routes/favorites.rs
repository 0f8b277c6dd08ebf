use axum::{
    Router,
    extract::State,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::{favorites::FavoriteRequest, params::UserQuery},
    error::AppResult,
    response::ApiResponse,
    routes::extract::{Payload, QueryParams},
    services::favorite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(list_favorites).post(add_favorite).delete(remove_favorite),
    )
}

#[utoipa::path(
    delete,
    path = "/api/favorites",
    request_body = FavoriteRequest,
    responses(
        (status = 200, description = "Removed from favorites", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "User, product, favorites or entry not found")
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    Payload(payload): Payload<FavoriteRequest>,
) -> AppResult<ApiResponse<serde_json::Value>> {
    favorite_service::remove_favorite(state.store.as_ref(), payload).await
}

#[utoipa::path(
    get,
    path = "/api/favorites",
    params(
        ("user_id" = String, Query, description = "Owner of the favorites")
    ),
    responses(
        (status = 200, description = "Favorite product ids", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "User or favorites not found")
    ),
    tag = "Favorites"
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<UserQuery>,
) -> AppResult<ApiResponse<Vec<Uuid>>> {
    favorite_service::get_favorites(state.store.as_ref(), query).await
}

#[utoipa::path(
    post,
    path = "/api/favorites",
    request_body = FavoriteRequest,
    responses(
        (status = 200, description = "Added to favorites", body = ApiResponse<serde_json::Value>),
        (status = 400, description = "Missing field, already a favorite, or favorites list gone"),
        (status = 404, description = "User or product not found")
    ),
    tag = "Favorites"
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    Payload(payload): Payload<FavoriteRequest>,
) -> AppResult<ApiResponse<serde_json::Value>> {
    favorite_service::add_favorite(state.store.as_ref(), payload).await
}
