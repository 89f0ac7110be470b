// src/handlers/banners.rs

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
use crate::common::json::{bool_param, enum_param, AppJson, AppPath};
use crate::common::response::ApiResponse;
use crate::config::AppState;
use crate::models::banner::{Banner, BannerPage};

use super::{not_blank, resolve_new_slug, resolve_updated_slug};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBannerPayload {
    #[validate(custom(function = not_blank, message = "Name is required"))]
    pub name: String,

    /// Explicit slug; left blank it is derived from `name`.
    pub slug: Option<String>,

    #[validate(custom(function = not_blank, message = "Image is required"))]
    pub image: String,

    pub page: BannerPage,

    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Partial update; absent fields keep their stored value. An empty `slug`
/// clears the field, which triggers re-derivation from the name.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBannerPayload {
    #[validate(custom(function = not_blank, message = "Name cannot be empty"))]
    pub name: Option<String>,

    pub slug: Option<String>,

    #[validate(custom(function = not_blank, message = "Image cannot be empty"))]
    pub image: Option<String>,

    pub page: Option<BannerPage>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BannerListQuery {
    /// "true" or "false"; empty means no filter.
    pub is_active: Option<String>,
    /// One of the site sections; empty means no filter.
    pub page: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/banners",
    params(BannerListQuery),
    responses((status = 200, description = "Banners matching the filters", body = [Banner])),
    tag = "banners"
)]
pub async fn list_banners(
    State(state): State<AppState>,
    Query(query): Query<BannerListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let is_active = bool_param("isActive", query.is_active.as_deref())?;
    let page = enum_param::<BannerPage>("page", query.page.as_deref())?;

    let banners = state.banners.list(is_active, page).await?;
    Ok(Json(ApiResponse::list(banners)))
}

#[utoipa::path(
    get,
    path = "/api/banners/{id}",
    params(("id" = Uuid, Path, description = "Banner id")),
    responses(
        (status = 200, description = "The banner", body = Banner),
        (status = 404, description = "No banner with that id")
    ),
    tag = "banners"
)]
pub async fn get_banner(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let banner = state.banners.find(id).await?;
    Ok(Json(ApiResponse::ok(banner)))
}

#[utoipa::path(
    get,
    path = "/api/banners/page/{page}",
    params(("page" = BannerPage, Path, description = "Site section")),
    responses(
        (status = 200, description = "First active banner for the page", body = Banner),
        (status = 404, description = "No active banner for the page")
    ),
    tag = "banners"
)]
pub async fn get_banner_by_page(
    State(state): State<AppState>,
    AppPath(page): AppPath<BannerPage>,
) -> Result<impl IntoResponse, AppError> {
    let banner = state.banners.find_for_page(page).await?;
    Ok(Json(ApiResponse::ok(banner)))
}

#[utoipa::path(
    post,
    path = "/api/banners",
    request_body = CreateBannerPayload,
    responses(
        (status = 201, description = "Banner created", body = Banner),
        (status = 400, description = "Validation failed or slug already in use")
    ),
    tag = "banners"
)]
pub async fn create_banner(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateBannerPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let slug = resolve_new_slug(&*state.banners, payload.slug.as_deref(), &payload.name).await?;

    let now = Utc::now();
    let banner = Banner {
        id: Uuid::new_v4(),
        name: payload.name.trim().to_string(),
        slug,
        image: payload.image.trim().to_string(),
        page: payload.page,
        title: payload.title,
        subtitle: payload.subtitle,
        order: payload.order.unwrap_or(0),
        is_active: payload.is_active.unwrap_or(true),
        created_at: now,
        updated_at: now,
    };

    let created = state.banners.insert(&banner).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(created, "Banner created successfully")),
    ))
}

#[utoipa::path(
    put,
    path = "/api/banners/{id}",
    params(("id" = Uuid, Path, description = "Banner id")),
    request_body = UpdateBannerPayload,
    responses(
        (status = 200, description = "Banner updated", body = Banner),
        (status = 400, description = "Validation failed or slug already in use"),
        (status = 404, description = "No banner with that id")
    ),
    tag = "banners"
)]
pub async fn update_banner(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateBannerPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut banner = state.banners.find(id).await?;

    if let Some(name) = payload.name {
        banner.name = name.trim().to_string();
    }
    if let Some(image) = payload.image {
        banner.image = image.trim().to_string();
    }
    if let Some(page) = payload.page {
        banner.page = page;
    }
    if let Some(title) = payload.title {
        banner.title = Some(title);
    }
    if let Some(subtitle) = payload.subtitle {
        banner.subtitle = Some(subtitle);
    }
    if let Some(order) = payload.order {
        banner.order = order;
    }
    if let Some(is_active) = payload.is_active {
        banner.is_active = is_active;
    }

    banner.slug = resolve_updated_slug(
        &*state.banners,
        banner.slug.take(),
        payload.slug.as_deref(),
        &banner.name,
        id,
    )
    .await?;

    banner.updated_at = Utc::now();
    let updated = state.banners.update(&banner).await?;
    Ok(Json(ApiResponse::ok_with_message(updated, "Banner updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/banners/{id}",
    params(("id" = Uuid, Path, description = "Banner id")),
    responses(
        (status = 200, description = "Banner deleted"),
        (status = 404, description = "No banner with that id")
    ),
    tag = "banners"
)]
pub async fn delete_banner(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.banners.delete(id).await?;
    Ok(Json(ApiResponse::message("Banner deleted successfully")))
}
