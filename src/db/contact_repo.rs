// src/db/contact_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::contact::{Contact, ContactType};

pub(crate) const CONTACT_NOT_FOUND: &str = "Contact not found";

/// Persistence seam for contact channels. No slug here, contacts are only
/// ever addressed by id.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn list(
        &self,
        is_active: Option<bool>,
        contact_type: Option<ContactType>,
    ) -> Result<Vec<Contact>, AppError>;

    async fn find(&self, id: Uuid) -> Result<Contact, AppError>;

    async fn insert(&self, contact: &Contact) -> Result<Contact, AppError>;

    async fn update(&self, contact: &Contact) -> Result<Contact, AppError>;

    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn list(
        &self,
        is_active: Option<bool>,
        contact_type: Option<ContactType>,
    ) -> Result<Vec<Contact>, AppError> {
        let contacts = sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, name, contact_type, label, value, href, icon, icon_type,
                   color, sort_order, is_active, created_at, updated_at
            FROM contacts
            WHERE ($1::boolean IS NULL OR is_active = $1)
              AND ($2::contact_type IS NULL OR contact_type = $2)
            ORDER BY sort_order ASC, created_at DESC
            "#,
        )
        .bind(is_active)
        .bind(contact_type)
        .fetch_all(&self.pool)
        .await?;

        Ok(contacts)
    }

    async fn find(&self, id: Uuid) -> Result<Contact, AppError> {
        sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, name, contact_type, label, value, href, icon, icon_type,
                   color, sort_order, is_active, created_at, updated_at
            FROM contacts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound(CONTACT_NOT_FOUND))
    }

    async fn insert(&self, contact: &Contact) -> Result<Contact, AppError> {
        let created = sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts (id, name, contact_type, label, value, href, icon,
                                  icon_type, color, sort_order, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id, name, contact_type, label, value, href, icon, icon_type,
                      color, sort_order, is_active, created_at, updated_at
            "#,
        )
        .bind(contact.id)
        .bind(&contact.name)
        .bind(contact.contact_type)
        .bind(&contact.label)
        .bind(&contact.value)
        .bind(&contact.href)
        .bind(&contact.icon)
        .bind(contact.icon_type)
        .bind(&contact.color)
        .bind(contact.order)
        .bind(contact.is_active)
        .bind(contact.created_at)
        .bind(contact.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, contact: &Contact) -> Result<Contact, AppError> {
        sqlx::query_as::<_, Contact>(
            r#"
            UPDATE contacts
            SET name = $2, contact_type = $3, label = $4, value = $5, href = $6,
                icon = $7, icon_type = $8, color = $9, sort_order = $10,
                is_active = $11, updated_at = $12
            WHERE id = $1
            RETURNING id, name, contact_type, label, value, href, icon, icon_type,
                      color, sort_order, is_active, created_at, updated_at
            "#,
        )
        .bind(contact.id)
        .bind(&contact.name)
        .bind(contact.contact_type)
        .bind(&contact.label)
        .bind(&contact.value)
        .bind(&contact.href)
        .bind(&contact.icon)
        .bind(contact.icon_type)
        .bind(&contact.color)
        .bind(contact.order)
        .bind(contact.is_active)
        .bind(contact.updated_at)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound(CONTACT_NOT_FOUND))
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(CONTACT_NOT_FOUND));
        }
        Ok(())
    }
}
