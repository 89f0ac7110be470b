// src/models/banner.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Site sections a banner can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "banner_page", rename_all = "lowercase")]
pub enum BannerPage {
    Home,
    About,
    Products,
    News,
    Handbook,
    Contact,
}

impl BannerPage {
    /// Wire token, as used in URLs and query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Products => "products",
            Self::News => "news",
            Self::Handbook => "handbook",
            Self::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: Uuid,

    #[schema(example = "Sầu Riêng Đặc Biệt")]
    pub name: String,

    /// Unique URL key. Derived from `name` whenever it is left blank.
    #[schema(example = "sau-rieng-dac-biet")]
    pub slug: Option<String>,

    #[schema(example = "/uploads/banner-home.jpg")]
    pub image: String,

    pub page: BannerPage,

    pub title: Option<String>,
    pub subtitle: Option<String>,

    /// Ascending sort key within a page.
    #[sqlx(rename = "sort_order")]
    pub order: i32,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
