// src/db/product_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::db::SlugIndex;
use crate::models::product::{Product, ProductType};

pub(crate) const PRODUCT_NOT_FOUND: &str = "Product not found";

#[async_trait]
pub trait ProductStore: SlugIndex {
    async fn list(
        &self,
        is_active: Option<bool>,
        product_type: Option<ProductType>,
    ) -> Result<Vec<Product>, AppError>;

    async fn find(&self, id: Uuid) -> Result<Product, AppError>;

    /// Lookup by slug, used by the product detail page.
    async fn find_by_slug(&self, slug: &str) -> Result<Product, AppError>;

    async fn insert(&self, product: &Product) -> Result<Product, AppError>;

    async fn update(&self, product: &Product) -> Result<Product, AppError>;

    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlugIndex for PgProductStore {
    async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, AppError> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM products WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(slug)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await?;

        Ok(taken)
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(
        &self,
        is_active: Option<bool>,
        product_type: Option<ProductType>,
    ) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, slug, product_type, description, image,
                   sort_order, is_active, created_at, updated_at
            FROM products
            WHERE ($1::boolean IS NULL OR is_active = $1)
              AND ($2::product_type IS NULL OR product_type = $2)
            ORDER BY sort_order ASC, created_at DESC
            "#,
        )
        .bind(is_active)
        .bind(product_type)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn find(&self, id: Uuid) -> Result<Product, AppError> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, slug, product_type, description, image,
                   sort_order, is_active, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound(PRODUCT_NOT_FOUND))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Product, AppError> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, slug, product_type, description, image,
                   sort_order, is_active, created_at, updated_at
            FROM products
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound(PRODUCT_NOT_FOUND))
    }

    async fn insert(&self, product: &Product) -> Result<Product, AppError> {
        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (id, name, slug, product_type, description, image,
                                  sort_order, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, name, slug, product_type, description, image,
                      sort_order, is_active, created_at, updated_at
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.slug)
        .bind(product.product_type)
        .bind(&product.description)
        .bind(&product.image)
        .bind(product.order)
        .bind(product.is_active)
        .bind(product.created_at)
        .bind(product.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| super::slug_conflict(e, product.slug.as_deref()))
    }

    async fn update(&self, product: &Product) -> Result<Product, AppError> {
        sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = $2, slug = $3, product_type = $4, description = $5,
                image = $6, sort_order = $7, is_active = $8, updated_at = $9
            WHERE id = $1
            RETURNING id, name, slug, product_type, description, image,
                      sort_order, is_active, created_at, updated_at
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.slug)
        .bind(product.product_type)
        .bind(&product.description)
        .bind(&product.image)
        .bind(product.order)
        .bind(product.is_active)
        .bind(product.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| super::slug_conflict(e, product.slug.as_deref()))?
        .ok_or(AppError::NotFound(PRODUCT_NOT_FOUND))
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(PRODUCT_NOT_FOUND));
        }
        Ok(())
    }
}
