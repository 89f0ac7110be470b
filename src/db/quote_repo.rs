// src/db/quote_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::quote::{QuoteRequest, QuoteStatus};

pub(crate) const QUOTE_NOT_FOUND: &str = "Quote request not found";

#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Newest first so fresh requests surface at the top of the admin list.
    async fn list(&self, status: Option<QuoteStatus>) -> Result<Vec<QuoteRequest>, AppError>;

    async fn find(&self, id: Uuid) -> Result<QuoteRequest, AppError>;

    async fn insert(&self, quote: &QuoteRequest) -> Result<QuoteRequest, AppError>;

    async fn update(&self, quote: &QuoteRequest) -> Result<QuoteRequest, AppError>;

    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct PgQuoteStore {
    pool: PgPool,
}

impl PgQuoteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuoteStore for PgQuoteStore {
    async fn list(&self, status: Option<QuoteStatus>) -> Result<Vec<QuoteRequest>, AppError> {
        let quotes = sqlx::query_as::<_, QuoteRequest>(
            r#"
            SELECT id, name, phone, email, company, product, quantity, message,
                   status, created_at, updated_at
            FROM quote_requests
            WHERE ($1::quote_status IS NULL OR status = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(quotes)
    }

    async fn find(&self, id: Uuid) -> Result<QuoteRequest, AppError> {
        sqlx::query_as::<_, QuoteRequest>(
            r#"
            SELECT id, name, phone, email, company, product, quantity, message,
                   status, created_at, updated_at
            FROM quote_requests
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound(QUOTE_NOT_FOUND))
    }

    async fn insert(&self, quote: &QuoteRequest) -> Result<QuoteRequest, AppError> {
        let created = sqlx::query_as::<_, QuoteRequest>(
            r#"
            INSERT INTO quote_requests (id, name, phone, email, company, product,
                                        quantity, message, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, name, phone, email, company, product, quantity, message,
                      status, created_at, updated_at
            "#,
        )
        .bind(quote.id)
        .bind(&quote.name)
        .bind(&quote.phone)
        .bind(&quote.email)
        .bind(&quote.company)
        .bind(&quote.product)
        .bind(&quote.quantity)
        .bind(&quote.message)
        .bind(quote.status)
        .bind(quote.created_at)
        .bind(quote.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, quote: &QuoteRequest) -> Result<QuoteRequest, AppError> {
        sqlx::query_as::<_, QuoteRequest>(
            r#"
            UPDATE quote_requests
            SET name = $2, phone = $3, email = $4, company = $5, product = $6,
                quantity = $7, message = $8, status = $9, updated_at = $10
            WHERE id = $1
            RETURNING id, name, phone, email, company, product, quantity, message,
                      status, created_at, updated_at
            "#,
        )
        .bind(quote.id)
        .bind(&quote.name)
        .bind(&quote.phone)
        .bind(&quote.email)
        .bind(&quote.company)
        .bind(&quote.product)
        .bind(&quote.quantity)
        .bind(&quote.message)
        .bind(quote.status)
        .bind(quote.updated_at)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound(QUOTE_NOT_FOUND))
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM quote_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(QUOTE_NOT_FOUND));
        }
        Ok(())
    }
}
