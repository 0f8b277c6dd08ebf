use axum::http::StatusCode;

use crate::{
    dto::{
        parse_id,
        products::{CreatedProduct, ProductDocument},
    },
    error::{AppError, AppResult},
    models::{Product, UpdateCounts},
    response::ApiResponse,
    store::CatalogStore,
};

/// Insert a product document.
///
/// Resubmitting the same document inserts a second product; there is no
/// duplicate detection on the catalog.
pub async fn create_product(
    store: &dyn CatalogStore,
    payload: ProductDocument,
) -> AppResult<ApiResponse<CreatedProduct>> {
    let fields = payload.validate_create()?;
    let product = store.insert_product(fields).await?;
    tracing::debug!(product_id = %product.id, "product created");

    Ok(ApiResponse::success(
        "商品新增成功",
        CreatedProduct { id: product.id },
    ))
}

pub async fn list_products(store: &dyn CatalogStore) -> AppResult<ApiResponse<Vec<Product>>> {
    let products = store.list_products().await?;
    Ok(ApiResponse::success("成功取得所有商品", products))
}

pub async fn get_product(store: &dyn CatalogStore, raw_id: &str) -> AppResult<ApiResponse<Product>> {
    let id = parse_id(raw_id)?;
    let product = store
        .find_product(id)
        .await?
        .ok_or_else(|| AppError::not_found("找不到該商品"))?;
    Ok(ApiResponse::success("成功取得該商品", product))
}

/// Merge the payload's fields (minus `_id`) into the product named by `_id`.
///
/// A miss is reported as 400 with the counts still in the body.
pub async fn update_product(
    store: &dyn CatalogStore,
    payload: ProductDocument,
) -> AppResult<ApiResponse<UpdateCounts>> {
    let (id, fields) = payload.validate_update()?;
    let counts = store.set_product_fields(id, fields).await?;

    if counts.matched_count == 0 {
        return Ok(ApiResponse::new(
            StatusCode::BAD_REQUEST,
            "找不到該商品資料",
            counts,
        ));
    }

    tracing::debug!(
        product_id = %id,
        modified = counts.modified_count,
        "product updated"
    );
    Ok(ApiResponse::success("商品更新成功", counts))
}
