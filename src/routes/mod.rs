use axum::{
    Router,
    http::{StatusCode, Uri},
    routing::get,
};
use serde_json::{Value, json};

use crate::{response::ApiResponse, state::AppState};

pub mod cart;
pub mod doc;
pub mod extract;
pub mod favorites;
pub mod health;
pub mod products;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/cart", cart::router())
        .nest("/favorites", favorites::router())
        .nest("/users", users::router())
}

/// Full application router with state bound. Transport layers are added by the binary.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiResponse<Value> {
    ApiResponse::new(
        StatusCode::NOT_FOUND,
        "找不到該路徑",
        json!({ "path": uri.path() }),
    )
}

async fn method_not_allowed() -> ApiResponse<Value> {
    ApiResponse::empty(StatusCode::METHOD_NOT_ALLOWED, "不支援該請求方法")
}
