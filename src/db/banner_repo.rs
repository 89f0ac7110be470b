// src/db/banner_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::db::SlugIndex;
use crate::models::banner::{Banner, BannerPage};

pub(crate) const BANNER_NOT_FOUND: &str = "Banner not found";
pub(crate) const PAGE_BANNER_NOT_FOUND: &str = "No active banner for this page";

/// Persistence seam for banners. Handlers only ever talk to this trait, so
/// tests can swap the Postgres backend for the in-memory one.
#[async_trait]
pub trait BannerStore: SlugIndex {
    async fn list(
        &self,
        is_active: Option<bool>,
        page: Option<BannerPage>,
    ) -> Result<Vec<Banner>, AppError>;

    async fn find(&self, id: Uuid) -> Result<Banner, AppError>;

    /// First active banner for a page, in display order.
    async fn find_for_page(&self, page: BannerPage) -> Result<Banner, AppError>;

    async fn insert(&self, banner: &Banner) -> Result<Banner, AppError>;

    async fn update(&self, banner: &Banner) -> Result<Banner, AppError>;

    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct PgBannerStore {
    pool: PgPool,
}

impl PgBannerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlugIndex for PgBannerStore {
    async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, AppError> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM banners WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(slug)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await?;

        Ok(taken)
    }
}

#[async_trait]
impl BannerStore for PgBannerStore {
    async fn list(
        &self,
        is_active: Option<bool>,
        page: Option<BannerPage>,
    ) -> Result<Vec<Banner>, AppError> {
        let banners = sqlx::query_as::<_, Banner>(
            r#"
            SELECT id, name, slug, image, page, title, subtitle,
                   sort_order, is_active, created_at, updated_at
            FROM banners
            WHERE ($1::boolean IS NULL OR is_active = $1)
              AND ($2::banner_page IS NULL OR page = $2)
            ORDER BY sort_order ASC, created_at DESC
            "#,
        )
        .bind(is_active)
        .bind(page)
        .fetch_all(&self.pool)
        .await?;

        Ok(banners)
    }

    async fn find(&self, id: Uuid) -> Result<Banner, AppError> {
        sqlx::query_as::<_, Banner>(
            r#"
            SELECT id, name, slug, image, page, title, subtitle,
                   sort_order, is_active, created_at, updated_at
            FROM banners
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound(BANNER_NOT_FOUND))
    }

    async fn find_for_page(&self, page: BannerPage) -> Result<Banner, AppError> {
        sqlx::query_as::<_, Banner>(
            r#"
            SELECT id, name, slug, image, page, title, subtitle,
                   sort_order, is_active, created_at, updated_at
            FROM banners
            WHERE page = $1 AND is_active = TRUE
            ORDER BY sort_order ASC, created_at DESC
            LIMIT 1
            "#,
        )
        .bind(page)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound(PAGE_BANNER_NOT_FOUND))
    }

    async fn insert(&self, banner: &Banner) -> Result<Banner, AppError> {
        sqlx::query_as::<_, Banner>(
            r#"
            INSERT INTO banners (id, name, slug, image, page, title, subtitle,
                                 sort_order, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, name, slug, image, page, title, subtitle,
                      sort_order, is_active, created_at, updated_at
            "#,
        )
        .bind(banner.id)
        .bind(&banner.name)
        .bind(&banner.slug)
        .bind(&banner.image)
        .bind(banner.page)
        .bind(&banner.title)
        .bind(&banner.subtitle)
        .bind(banner.order)
        .bind(banner.is_active)
        .bind(banner.created_at)
        .bind(banner.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| super::slug_conflict(e, banner.slug.as_deref()))
    }

    async fn update(&self, banner: &Banner) -> Result<Banner, AppError> {
        sqlx::query_as::<_, Banner>(
            r#"
            UPDATE banners
            SET name = $2, slug = $3, image = $4, page = $5, title = $6,
                subtitle = $7, sort_order = $8, is_active = $9, updated_at = $10
            WHERE id = $1
            RETURNING id, name, slug, image, page, title, subtitle,
                      sort_order, is_active, created_at, updated_at
            "#,
        )
        .bind(banner.id)
        .bind(&banner.name)
        .bind(&banner.slug)
        .bind(&banner.image)
        .bind(banner.page)
        .bind(&banner.title)
        .bind(&banner.subtitle)
        .bind(banner.order)
        .bind(banner.is_active)
        .bind(banner.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| super::slug_conflict(e, banner.slug.as_deref()))?
        .ok_or(AppError::NotFound(BANNER_NOT_FOUND))
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM banners WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(BANNER_NOT_FOUND));
        }
        Ok(())
    }
}
