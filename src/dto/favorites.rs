use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

use super::{non_blank, parse_id};

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct FavoriteRequest {
    pub user_id: Option<String>,
    pub product_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteInput {
    pub user_id: Uuid,
    pub product_id: Uuid,
}

impl FavoriteRequest {
    /// `missing` is the message reported when either id is absent.
    pub fn validate(self, missing: &str) -> AppResult<FavoriteInput> {
        let (Some(user_id), Some(product_id)) =
            (non_blank(self.user_id), non_blank(self.product_id))
        else {
            return Err(AppError::bad_request(missing));
        };
        Ok(FavoriteInput {
            user_id: parse_id(&user_id)?,
            product_id: parse_id(&product_id)?,
        })
    }
}
