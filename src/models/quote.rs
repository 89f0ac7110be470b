// src/models/quote.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Follow-up state of a quote request, advanced manually by the sales team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "quote_status", rename_all = "lowercase")]
pub enum QuoteStatus {
    New,
    Contacted,
    Closed,
}

impl QuoteStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub id: Uuid,

    pub name: String,

    #[schema(example = "0913224378")]
    pub phone: String,

    pub email: Option<String>,
    pub company: Option<String>,

    /// Free-text product the buyer is asking about.
    pub product: Option<String>,
    pub quantity: Option<String>,
    pub message: Option<String>,

    pub status: QuoteStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
