use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::ProductFields,
};

use super::{is_empty_value, parse_id};

pub const ID_FIELD: &str = "_id";

/// Arbitrary product document as submitted by the caller.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductDocument {
    #[schema(value_type = Object)]
    pub fields: ProductFields,
}

impl ProductDocument {
    fn check_not_empty(&self) -> AppResult<()> {
        if self.fields.is_empty() {
            return Err(AppError::bad_request("商品資料是空的"));
        }
        if self.fields.values().any(is_empty_value) {
            return Err(AppError::bad_request("商品資料不能包含空值"));
        }
        Ok(())
    }

    /// Fields to insert. Any client-supplied `_id` is discarded.
    pub fn validate_create(mut self) -> AppResult<ProductFields> {
        self.check_not_empty()?;
        self.fields.remove(ID_FIELD);
        if self.fields.is_empty() {
            return Err(AppError::bad_request("商品資料是空的"));
        }
        Ok(self.fields)
    }

    /// Target id and the fields to set on it.
    pub fn validate_update(mut self) -> AppResult<(Uuid, ProductFields)> {
        self.check_not_empty()?;
        let id = match self.fields.remove(ID_FIELD) {
            Some(Value::String(raw)) => parse_id(&raw)?,
            _ => return Err(AppError::bad_request("需要提供商品_id")),
        };
        if self.fields.is_empty() {
            return Err(AppError::bad_request("沒有要更新的商品欄位"));
        }
        Ok((id, self.fields))
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedProduct {
    #[serde(rename = "_id")]
    pub id: Uuid,
}
