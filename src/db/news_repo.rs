// src/db/news_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::db::SlugIndex;
use crate::models::news::NewsArticle;

pub(crate) const ARTICLE_NOT_FOUND: &str = "Article not found";

#[async_trait]
pub trait NewsStore: SlugIndex {
    /// Newest first; articles have no manual sort key.
    async fn list(&self, is_published: Option<bool>) -> Result<Vec<NewsArticle>, AppError>;

    async fn find(&self, id: Uuid) -> Result<NewsArticle, AppError>;

    async fn find_by_slug(&self, slug: &str) -> Result<NewsArticle, AppError>;

    async fn insert(&self, article: &NewsArticle) -> Result<NewsArticle, AppError>;

    async fn update(&self, article: &NewsArticle) -> Result<NewsArticle, AppError>;

    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct PgNewsStore {
    pool: PgPool,
}

impl PgNewsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlugIndex for PgNewsStore {
    async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, AppError> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM news_articles WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(slug)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await?;

        Ok(taken)
    }
}

#[async_trait]
impl NewsStore for PgNewsStore {
    async fn list(&self, is_published: Option<bool>) -> Result<Vec<NewsArticle>, AppError> {
        let articles = sqlx::query_as::<_, NewsArticle>(
            r#"
            SELECT id, title, slug, excerpt, content, image, is_published,
                   published_at, created_at, updated_at
            FROM news_articles
            WHERE ($1::boolean IS NULL OR is_published = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(is_published)
        .fetch_all(&self.pool)
        .await?;

        Ok(articles)
    }

    async fn find(&self, id: Uuid) -> Result<NewsArticle, AppError> {
        sqlx::query_as::<_, NewsArticle>(
            r#"
            SELECT id, title, slug, excerpt, content, image, is_published,
                   published_at, created_at, updated_at
            FROM news_articles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound(ARTICLE_NOT_FOUND))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<NewsArticle, AppError> {
        sqlx::query_as::<_, NewsArticle>(
            r#"
            SELECT id, title, slug, excerpt, content, image, is_published,
                   published_at, created_at, updated_at
            FROM news_articles
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound(ARTICLE_NOT_FOUND))
    }

    async fn insert(&self, article: &NewsArticle) -> Result<NewsArticle, AppError> {
        sqlx::query_as::<_, NewsArticle>(
            r#"
            INSERT INTO news_articles (id, title, slug, excerpt, content, image,
                                       is_published, published_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, title, slug, excerpt, content, image, is_published,
                      published_at, created_at, updated_at
            "#,
        )
        .bind(article.id)
        .bind(&article.title)
        .bind(&article.slug)
        .bind(&article.excerpt)
        .bind(&article.content)
        .bind(&article.image)
        .bind(article.is_published)
        .bind(article.published_at)
        .bind(article.created_at)
        .bind(article.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| super::slug_conflict(e, article.slug.as_deref()))
    }

    async fn update(&self, article: &NewsArticle) -> Result<NewsArticle, AppError> {
        sqlx::query_as::<_, NewsArticle>(
            r#"
            UPDATE news_articles
            SET title = $2, slug = $3, excerpt = $4, content = $5, image = $6,
                is_published = $7, published_at = $8, updated_at = $9
            WHERE id = $1
            RETURNING id, title, slug, excerpt, content, image, is_published,
                      published_at, created_at, updated_at
            "#,
        )
        .bind(article.id)
        .bind(&article.title)
        .bind(&article.slug)
        .bind(&article.excerpt)
        .bind(&article.content)
        .bind(&article.image)
        .bind(article.is_published)
        .bind(article.published_at)
        .bind(article.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| super::slug_conflict(e, article.slug.as_deref()))?
        .ok_or(AppError::NotFound(ARTICLE_NOT_FOUND))
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM news_articles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ARTICLE_NOT_FOUND));
        }
        Ok(())
    }
}
