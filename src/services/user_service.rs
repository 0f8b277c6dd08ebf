use crate::{
    dto::{parse_id, users::CreateUserRequest},
    error::{AppError, AppResult},
    models::User,
    response::ApiResponse,
    store::CatalogStore,
};

use super::require_user;

pub async fn create_user(
    store: &dyn CatalogStore,
    payload: CreateUserRequest,
) -> AppResult<ApiResponse<User>> {
    let email = payload.validate()?;
    let user = store
        .insert_user(&email)
        .await?
        .ok_or_else(|| AppError::bad_request("email已被使用"))?;
    tracing::info!(user_id = %user.id, "user created");
    Ok(ApiResponse::success("使用者建立成功", user))
}

pub async fn get_user(store: &dyn CatalogStore, raw_id: &str) -> AppResult<ApiResponse<User>> {
    let user = require_user(store, parse_id(raw_id)?).await?;
    Ok(ApiResponse::success("成功取得該使用者", user))
}
