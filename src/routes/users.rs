use axum::{
    Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    dto::users::CreateUserRequest,
    error::AppResult,
    models::User,
    response::ApiResponse,
    routes::extract::Payload,
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/{id}", get(get_user))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = ApiResponse<User>),
        (status = 400, description = "Missing or taken email")
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Payload(payload): Payload<CreateUserRequest>,
) -> AppResult<ApiResponse<User>> {
    user_service::create_user(state.store.as_ref(), payload).await
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User with its cart and favorites links", body = ApiResponse<User>),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<User>> {
    user_service::get_user(state.store.as_ref(), &id).await
}
