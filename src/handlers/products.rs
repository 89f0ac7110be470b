// src/handlers/products.rs

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
use crate::models::product::{Product, ProductType};

use super::{not_blank, resolve_new_slug, resolve_updated_slug};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    #[validate(custom(function = not_blank, message = "Name is required"))]
    pub name: String,

    pub slug: Option<String>,

    #[serde(rename = "type")]
    pub product_type: ProductType,

    pub description: Option<String>,

    #[validate(custom(function = not_blank, message = "Image is required"))]
    pub image: String,

    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductPayload {
    #[validate(custom(function = not_blank, message = "Name cannot be empty"))]
    pub name: Option<String>,

    pub slug: Option<String>,

    #[serde(rename = "type")]
    pub product_type: Option<ProductType>,

    pub description: Option<String>,

    #[validate(custom(function = not_blank, message = "Image cannot be empty"))]
    pub image: Option<String>,

    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductListQuery {
    /// "true" or "false"; empty means no filter.
    pub is_active: Option<String>,
    /// fresh, frozen or dried; empty means no filter.
    #[serde(rename = "type")]
    pub product_type: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductListQuery),
    responses((status = 200, description = "Products matching the filters", body = [Product])),
    tag = "products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let is_active = bool_param("isActive", query.is_active.as_deref())?;
    let product_type = enum_param::<ProductType>("type", query.product_type.as_deref())?;

    let products = state.products.list(is_active, product_type).await?;
    Ok(Json(ApiResponse::list(products)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "No product with that id")
    ),
    tag = "products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let product = state.products.find(id).await?;
    Ok(Json(ApiResponse::ok(product)))
}

#[utoipa::path(
    get,
    path = "/api/products/slug/{slug}",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "No product with that slug")
    ),
    tag = "products"
)]
pub async fn get_product_by_slug(
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let product = state.products.find_by_slug(&slug).await?;
    Ok(Json(ApiResponse::ok(product)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductPayload,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Validation failed or slug already in use")
    ),
    tag = "products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let slug = resolve_new_slug(&*state.products, payload.slug.as_deref(), &payload.name).await?;

    let now = Utc::now();
    let product = Product {
        id: Uuid::new_v4(),
        name: payload.name.trim().to_string(),
        slug,
        product_type: payload.product_type,
        description: payload.description,
        image: payload.image.trim().to_string(),
        order: payload.order.unwrap_or(0),
        is_active: payload.is_active.unwrap_or(true),
        created_at: now,
        updated_at: now,
    };

    let created = state.products.insert(&product).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(created, "Product created successfully")),
    ))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path, description = "Product id")),
    request_body = UpdateProductPayload,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Validation failed or slug already in use"),
        (status = 404, description = "No product with that id")
    ),
    tag = "products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut product = state.products.find(id).await?;

    if let Some(name) = payload.name {
        product.name = name.trim().to_string();
    }
    if let Some(product_type) = payload.product_type {
        product.product_type = product_type;
    }
    if let Some(description) = payload.description {
        product.description = Some(description);
    }
    if let Some(image) = payload.image {
        product.image = image.trim().to_string();
    }
    if let Some(order) = payload.order {
        product.order = order;
    }
    if let Some(is_active) = payload.is_active {
        product.is_active = is_active;
    }

    product.slug = resolve_updated_slug(
        &*state.products,
        product.slug.take(),
        payload.slug.as_deref(),
        &product.name,
        id,
    )
    .await?;

    product.updated_at = Utc::now();
    let updated = state.products.update(&product).await?;
    Ok(Json(ApiResponse::ok_with_message(updated, "Product updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "No product with that id")
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.products.delete(id).await?;
    Ok(Json(ApiResponse::message("Product deleted successfully")))
}
