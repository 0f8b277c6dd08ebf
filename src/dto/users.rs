use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

use super::non_blank;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    pub email: Option<String>,
}

impl CreateUserRequest {
    pub fn validate(self) -> AppResult<String> {
        non_blank(self.email)
            .map(|email| email.trim().to_string())
            .ok_or_else(|| AppError::bad_request("需要提供email"))
    }
}
