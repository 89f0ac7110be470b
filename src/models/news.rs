// src/models/news.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: Uuid,

    #[schema(example = "Mùa vải thiều 2026 bội thu")]
    pub title: String,

    /// Unique URL key. Derived from `title` whenever it is left blank.
    pub slug: Option<String>,

    /// Short teaser shown on listing pages.
    pub excerpt: Option<String>,

    pub content: String,

    pub image: Option<String>,

    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
