// src/models/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "product_type", rename_all = "lowercase")]
pub enum ProductType {
    Fresh,
    Frozen,
    Dried,
}

impl ProductType {
    pub const ALL: [ProductType; 3] = [ProductType::Fresh, ProductType::Frozen, ProductType::Dried];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Frozen => "frozen",
            Self::Dried => "dried",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,

    #[schema(example = "Thanh Long Ruột Đỏ")]
    pub name: String,

    /// Unique URL key. Derived from `name` whenever it is left blank.
    pub slug: Option<String>,

    #[serde(rename = "type")]
    pub product_type: ProductType,

    pub description: Option<String>,

    pub image: String,

    #[sqlx(rename = "sort_order")]
    pub order: i32,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
