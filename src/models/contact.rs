// src/models/contact.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Tint class applied when a contact is created without one.
pub const DEFAULT_CONTACT_COLOR: &str = "bg-blue-500";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "contact_type", rename_all = "lowercase")]
pub enum ContactType {
    Phone,
    Messenger,
    Zalo,
    Email,
    Whatsapp,
    Telegram,
    Viber,
    Skype,
    Other,
}

impl ContactType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Messenger => "messenger",
            Self::Zalo => "zalo",
            Self::Email => "email",
            Self::Whatsapp => "whatsapp",
            Self::Telegram => "telegram",
            Self::Viber => "viber",
            Self::Skype => "skype",
            Self::Other => "other",
        }
    }
}

/// How the frontend should render the `icon` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "icon_type", rename_all = "lowercase")]
pub enum IconType {
    Image,
    Svg,
    Icon,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,

    #[schema(example = "Hotline")]
    pub name: String,

    #[serde(rename = "type")]
    pub contact_type: ContactType,

    #[schema(example = "0913 224 378")]
    pub label: String,

    pub value: String,

    #[schema(example = "tel:+84913224378")]
    pub href: String,

    pub icon: Option<String>,
    pub icon_type: IconType,

    /// CSS class the site uses to tint the contact button.
    #[schema(example = "bg-blue-500")]
    pub color: String,

    #[sqlx(rename = "sort_order")]
    pub order: i32,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
