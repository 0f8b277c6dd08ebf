use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

use super::{non_blank, parse_id};

/// `?user_id=` selector shared by the cart and favorites reads.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UserQuery {
    pub user_id: Option<String>,
}

impl UserQuery {
    pub fn validate(self) -> AppResult<Uuid> {
        match non_blank(self.user_id) {
            Some(raw) => parse_id(&raw),
            None => Err(AppError::bad_request("需要提供user_id")),
        }
    }
}
