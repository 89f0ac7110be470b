// src/handlers/news.rs

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::common::error::AppError;
use crate::common::json::{bool_param, AppJson, AppPath};
use crate::common::response::ApiResponse;
use crate::config::AppState;
use crate::models::news::NewsArticle;

use super::{not_blank, resolve_new_slug, resolve_updated_slug};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticlePayload {
    #[validate(custom(function = not_blank, message = "Title is required"))]
    pub title: String,

    pub slug: Option<String>,
    pub excerpt: Option<String>,

    #[validate(custom(function = not_blank, message = "Content is required"))]
    pub content: String,

    pub image: Option<String>,
    pub is_published: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticlePayload {
    #[validate(custom(function = not_blank, message = "Title cannot be empty"))]
    pub title: Option<String>,

    pub slug: Option<String>,
    pub excerpt: Option<String>,

    #[validate(custom(function = not_blank, message = "Content cannot be empty"))]
    pub content: Option<String>,

    pub image: Option<String>,
    pub is_published: Option<bool>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct NewsListQuery {
    /// "true" or "false"; empty means no filter.
    pub is_published: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/news",
    params(NewsListQuery),
    responses((status = 200, description = "Articles, newest first", body = [NewsArticle])),
    tag = "news"
)]
pub async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<NewsListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let is_published = bool_param("isPublished", query.is_published.as_deref())?;

    let articles = state.news.list(is_published).await?;
    Ok(Json(ApiResponse::list(articles)))
}

#[utoipa::path(
    get,
    path = "/api/news/{id}",
    params(("id" = Uuid, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article", body = NewsArticle),
        (status = 404, description = "No article with that id")
    ),
    tag = "news"
)]
pub async fn get_article(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let article = state.news.find(id).await?;
    Ok(Json(ApiResponse::ok(article)))
}

#[utoipa::path(
    get,
    path = "/api/news/slug/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "The article", body = NewsArticle),
        (status = 404, description = "No article with that slug")
    ),
    tag = "news"
)]
pub async fn get_article_by_slug(
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let article = state.news.find_by_slug(&slug).await?;
    Ok(Json(ApiResponse::ok(article)))
}

#[utoipa::path(
    post,
    path = "/api/news",
    request_body = CreateArticlePayload,
    responses(
        (status = 201, description = "Article created", body = NewsArticle),
        (status = 400, description = "Validation failed or slug already in use")
    ),
    tag = "news"
)]
pub async fn create_article(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateArticlePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let slug = resolve_new_slug(&*state.news, payload.slug.as_deref(), &payload.title).await?;

    let now = Utc::now();
    let is_published = payload.is_published.unwrap_or(true);
    let article = NewsArticle {
        id: Uuid::new_v4(),
        title: payload.title.trim().to_string(),
        slug,
        excerpt: payload.excerpt,
        content: payload.content,
        image: payload.image,
        is_published,
        // published articles get stamped on first save
        published_at: is_published.then_some(now),
        created_at: now,
        updated_at: now,
    };

    let created = state.news.insert(&article).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(created, "Article created successfully")),
    ))
}

#[utoipa::path(
    put,
    path = "/api/news/{id}",
    params(("id" = Uuid, Path, description = "Article id")),
    request_body = UpdateArticlePayload,
    responses(
        (status = 200, description = "Article updated", body = NewsArticle),
        (status = 400, description = "Validation failed or slug already in use"),
        (status = 404, description = "No article with that id")
    ),
    tag = "news"
)]
pub async fn update_article(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateArticlePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut article = state.news.find(id).await?;

    if let Some(title) = payload.title {
        article.title = title.trim().to_string();
    }
    if let Some(excerpt) = payload.excerpt {
        article.excerpt = Some(excerpt);
    }
    if let Some(content) = payload.content {
        article.content = content;
    }
    if let Some(image) = payload.image {
        article.image = Some(image);
    }
    if let Some(is_published) = payload.is_published {
        article.is_published = is_published;
        if is_published && article.published_at.is_none() {
            article.published_at = Some(Utc::now());
        }
    }

    article.slug = resolve_updated_slug(
        &*state.news,
        article.slug.take(),
        payload.slug.as_deref(),
        &article.title,
        id,
    )
    .await?;

    article.updated_at = Utc::now();
    let updated = state.news.update(&article).await?;
    Ok(Json(ApiResponse::ok_with_message(updated, "Article updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    params(("id" = Uuid, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article deleted"),
        (status = 404, description = "No article with that id")
    ),
    tag = "news"
)]
pub async fn delete_article(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.news.delete(id).await?;
    Ok(Json(ApiResponse::message("Article deleted successfully")))
}
