use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;

/// Free-form product fields as submitted by the caller.
pub type ProductFields = Map<String, Value>;

/// A product document. Serialized as its fields plus `_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: ProductFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub cart_id: Option<Uuid>,
    pub favorites_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartLine {
    pub product_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Cart {
    pub id: Uuid,
    pub user_id: Uuid,
    pub items: Vec<CartLine>,
}

impl Cart {
    pub fn contains(&self, product_id: Uuid) -> bool {
        self.items.iter().any(|line| line.product_id == product_id)
    }

    pub fn product_ids(&self) -> Vec<Uuid> {
        self.items.iter().map(|line| line.product_id).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Favorites {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_ids: Vec<Uuid>,
}

/// Outcome of an update: documents matched and documents actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateCounts {
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateCounts {
    pub fn new(matched_count: u64, modified_count: u64) -> Self {
        Self {
            matched_count,
            modified_count,
        }
    }
}
