use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

use super::{non_blank, parse_id};

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AddToCartRequest {
    pub user_id: Option<String>,
    pub product_id: Option<String>,
    pub quantity: Option<i32>,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateCartRequest {
    pub user_id: Option<String>,
    pub product_id: Option<String>,
    pub quantity: Option<i32>,
}

/// A validated cart mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLineInput {
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
}

impl AddToCartRequest {
    pub fn validate(self) -> AppResult<CartLineInput> {
        let (Some(user_id), Some(product_id), Some(quantity)) = (
            non_blank(self.user_id),
            non_blank(self.product_id),
            self.quantity.filter(|q| *q != 0),
        ) else {
            return Err(AppError::bad_request("需要提供user_id, product_id, quantity"));
        };
        if quantity < 0 {
            return Err(AppError::bad_request("商品數量必須大於0"));
        }
        Ok(CartLineInput {
            user_id: parse_id(&user_id)?,
            product_id: parse_id(&product_id)?,
            quantity,
        })
    }
}

impl UpdateCartRequest {
    /// Quantity 0 is allowed here and means "remove the line".
    pub fn validate(self) -> AppResult<CartLineInput> {
        let (Some(user_id), Some(product_id), Some(quantity)) = (
            non_blank(self.user_id),
            non_blank(self.product_id),
            self.quantity,
        ) else {
            return Err(AppError::bad_request("請提供user_id, product_id, quantity"));
        };
        if quantity < 0 {
            return Err(AppError::bad_request("商品數量不能小於0"));
        }
        Ok(CartLineInput {
            user_id: parse_id(&user_id)?,
            product_id: parse_id(&product_id)?,
            quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(quantity: Option<i32>) -> AddToCartRequest {
        AddToCartRequest {
            user_id: Some(Uuid::new_v4().to_string()),
            product_id: Some(Uuid::new_v4().to_string()),
            quantity,
        }
    }

    #[test]
    fn add_rejects_zero_and_missing_quantity() {
        for quantity in [None, Some(0)] {
            let err = add(quantity).validate().unwrap_err();
            assert_eq!(err.to_string(), "需要提供user_id, product_id, quantity");
        }
        assert!(add(Some(-1)).validate().is_err());
        assert_eq!(add(Some(3)).validate().unwrap().quantity, 3);
    }

    #[test]
    fn update_accepts_zero_quantity() {
        let request = UpdateCartRequest {
            user_id: Some(Uuid::new_v4().to_string()),
            product_id: Some(Uuid::new_v4().to_string()),
            quantity: Some(0),
        };
        assert_eq!(request.validate().unwrap().quantity, 0);
    }

    #[test]
    fn blank_user_id_is_missing() {
        let request = UpdateCartRequest {
            user_id: Some("   ".into()),
            product_id: Some(Uuid::new_v4().to_string()),
            quantity: Some(1),
        };
        assert_eq!(
            request.validate().unwrap_err().to_string(),
            "請提供user_id, product_id, quantity"
        );
    }
}
