// src/handlers/quotes.rs

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
use crate::common::json::{enum_param, AppJson, AppPath};
use crate::common::response::ApiResponse;
use crate::config::AppState;
use crate::models::quote::{QuoteRequest, QuoteStatus};

use super::not_blank;

/// Submitted by the public quote form, so optional fields tolerate the empty
/// strings the form sends for untouched inputs.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuotePayload {
    #[validate(custom(function = not_blank, message = "Name is required"))]
    pub name: String,

    #[validate(custom(function = not_blank, message = "Phone is required"))]
    pub phone: String,

    pub email: Option<String>,
    pub company: Option<String>,
    pub product: Option<String>,
    pub quantity: Option<String>,
    pub message: Option<String>,
}

/// The sales team only ever moves a request through its follow-up states.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuotePayload {
    pub status: QuoteStatus,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct QuoteListQuery {
    /// new, contacted or closed; empty means no filter.
    pub status: Option<String>,
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[utoipa::path(
    get,
    path = "/api/quotes",
    params(QuoteListQuery),
    responses((status = 200, description = "Quote requests, newest first", body = [QuoteRequest])),
    tag = "quotes"
)]
pub async fn list_quotes(
    State(state): State<AppState>,
    Query(query): Query<QuoteListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let status = enum_param::<QuoteStatus>("status", query.status.as_deref())?;

    let quotes = state.quotes.list(status).await?;
    Ok(Json(ApiResponse::list(quotes)))
}

#[utoipa::path(
    get,
    path = "/api/quotes/{id}",
    params(("id" = Uuid, Path, description = "Quote request id")),
    responses(
        (status = 200, description = "The quote request", body = QuoteRequest),
        (status = 404, description = "No quote request with that id")
    ),
    tag = "quotes"
)]
pub async fn get_quote(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let quote = state.quotes.find(id).await?;
    Ok(Json(ApiResponse::ok(quote)))
}

#[utoipa::path(
    post,
    path = "/api/quotes",
    request_body = CreateQuotePayload,
    responses(
        (status = 201, description = "Quote request received", body = QuoteRequest),
        (status = 400, description = "Validation failed")
    ),
    tag = "quotes"
)]
pub async fn create_quote(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateQuotePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let now = Utc::now();
    let quote = QuoteRequest {
        id: Uuid::new_v4(),
        name: payload.name.trim().to_string(),
        phone: payload.phone.trim().to_string(),
        email: blank_to_none(payload.email),
        company: blank_to_none(payload.company),
        product: blank_to_none(payload.product),
        quantity: blank_to_none(payload.quantity),
        message: blank_to_none(payload.message),
        status: QuoteStatus::New,
        created_at: now,
        updated_at: now,
    };

    let created = state.quotes.insert(&quote).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            created,
            "Quote request submitted successfully",
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/quotes/{id}",
    params(("id" = Uuid, Path, description = "Quote request id")),
    request_body = UpdateQuotePayload,
    responses(
        (status = 200, description = "Status updated", body = QuoteRequest),
        (status = 404, description = "No quote request with that id")
    ),
    tag = "quotes"
)]
pub async fn update_quote(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateQuotePayload>,
) -> Result<impl IntoResponse, AppError> {
    let mut quote = state.quotes.find(id).await?;

    quote.status = payload.status;
    quote.updated_at = Utc::now();

    let updated = state.quotes.update(&quote).await?;
    Ok(Json(ApiResponse::ok_with_message(updated, "Quote request updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/quotes/{id}",
    params(("id" = Uuid, Path, description = "Quote request id")),
    responses(
        (status = 200, description = "Quote request deleted"),
        (status = 404, description = "No quote request with that id")
    ),
    tag = "quotes"
)]
pub async fn delete_quote(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.quotes.delete(id).await?;
    Ok(Json(ApiResponse::message("Quote request deleted successfully")))
}
