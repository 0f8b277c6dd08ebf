use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::products::{CreatedProduct, ProductDocument},
    error::AppResult,
    models::{Product, UpdateCounts},
    response::ApiResponse,
    routes::extract::Payload,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_products).post(create_product).put(update_product),
        )
        .route("/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "Every product, ids as strings", body = ApiResponse<serde_json::Value>)
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<Product>>> {
    product_service::list_products(state.store.as_ref()).await
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Malformed id or store failure"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Product>> {
    product_service::get_product(state.store.as_ref(), &id).await
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = ProductDocument,
    responses(
        (status = 200, description = "Product created", body = ApiResponse<CreatedProduct>),
        (status = 400, description = "Empty payload or empty field value")
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Payload(payload): Payload<ProductDocument>,
) -> AppResult<ApiResponse<CreatedProduct>> {
    product_service::create_product(state.store.as_ref(), payload).await
}

#[utoipa::path(
    put,
    path = "/api/products",
    request_body = ProductDocument,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<UpdateCounts>),
        (status = 400, description = "Missing _id, empty values, or no product matched", body = ApiResponse<UpdateCounts>)
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Payload(payload): Payload<ProductDocument>,
) -> AppResult<ApiResponse<UpdateCounts>> {
    product_service::update_product(state.store.as_ref(), payload).await
}
