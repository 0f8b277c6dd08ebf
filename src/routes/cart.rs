use axum::{
    Router,
    extract::State,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::{
        cart::{AddToCartRequest, UpdateCartRequest},
        params::UserQuery,
    },
    error::AppResult,
    models::UpdateCounts,
    response::ApiResponse,
    routes::extract::{Payload, QueryParams},
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_cart).post(add_to_cart).put(update_cart_item))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    params(
        ("user_id" = String, Query, description = "Owner of the cart")
    ),
    responses(
        (status = 200, description = "Product ids in the user's cart", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "User or cart not found")
    ),
    tag = "Cart"
)]
pub async fn get_cart(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<UserQuery>,
) -> AppResult<ApiResponse<Vec<Uuid>>> {
    cart_service::get_cart(state.store.as_ref(), query).await
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Added to cart", body = ApiResponse<serde_json::Value>),
        (status = 400, description = "Missing field or product already in cart"),
        (status = 404, description = "User, product or cart not found")
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Payload(payload): Payload<AddToCartRequest>,
) -> AppResult<ApiResponse<serde_json::Value>> {
    cart_service::add_to_cart(state.store.as_ref(), payload).await
}

#[utoipa::path(
    put,
    path = "/api/cart",
    request_body = UpdateCartRequest,
    responses(
        (status = 200, description = "Quantity updated; 0 removes the line", body = ApiResponse<UpdateCounts>),
        (status = 400, description = "Missing field"),
        (status = 404, description = "User, product or cart not found")
    ),
    tag = "Cart"
)]
pub async fn update_cart_item(
    State(state): State<AppState>,
    Payload(payload): Payload<UpdateCartRequest>,
) -> AppResult<ApiResponse<UpdateCounts>> {
    cart_service::update_cart_item(state.store.as_ref(), payload).await
}
