// src/handlers/contacts.rs

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
use crate::models::contact::{Contact, ContactType, IconType, DEFAULT_CONTACT_COLOR};

use super::not_blank;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactPayload {
    #[validate(custom(function = not_blank, message = "Name is required"))]
    pub name: String,

    #[serde(rename = "type")]
    pub contact_type: ContactType,

    #[validate(custom(function = not_blank, message = "Label is required"))]
    pub label: String,

    #[validate(custom(function = not_blank, message = "Value is required"))]
    pub value: String,

    #[validate(custom(function = not_blank, message = "Href is required"))]
    pub href: String,

    pub icon: Option<String>,
    pub icon_type: Option<IconType>,
    pub color: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Partial update; empty-string `icon` and `color` reset to their defaults.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactPayload {
    #[validate(custom(function = not_blank, message = "Name cannot be empty"))]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub contact_type: Option<ContactType>,

    #[validate(custom(function = not_blank, message = "Label cannot be empty"))]
    pub label: Option<String>,

    #[validate(custom(function = not_blank, message = "Value cannot be empty"))]
    pub value: Option<String>,

    #[validate(custom(function = not_blank, message = "Href cannot be empty"))]
    pub href: Option<String>,

    pub icon: Option<String>,
    pub icon_type: Option<IconType>,
    pub color: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ContactListQuery {
    /// "true" or "false"; empty means no filter.
    pub is_active: Option<String>,
    /// One of the contact channel types; empty means no filter.
    #[serde(rename = "type")]
    pub contact_type: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/contacts",
    params(ContactListQuery),
    responses((status = 200, description = "Contacts matching the filters", body = [Contact])),
    tag = "contacts"
)]
pub async fn list_contacts(
    State(state): State<AppState>,
    Query(query): Query<ContactListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let is_active = bool_param("isActive", query.is_active.as_deref())?;
    let contact_type = enum_param::<ContactType>("type", query.contact_type.as_deref())?;

    let contacts = state.contacts.list(is_active, contact_type).await?;
    Ok(Json(ApiResponse::list(contacts)))
}

/// Shortcut the site footer uses; equivalent to `?isActive=true`.
#[utoipa::path(
    get,
    path = "/api/contacts/active",
    responses((status = 200, description = "Active contacts in display order", body = [Contact])),
    tag = "contacts"
)]
pub async fn list_active_contacts(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let contacts = state.contacts.list(Some(true), None).await?;
    Ok(Json(ApiResponse::list(contacts)))
}

#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    params(("id" = Uuid, Path, description = "Contact id")),
    responses(
        (status = 200, description = "The contact", body = Contact),
        (status = 404, description = "No contact with that id")
    ),
    tag = "contacts"
)]
pub async fn get_contact(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let contact = state.contacts.find(id).await?;
    Ok(Json(ApiResponse::ok(contact)))
}

#[utoipa::path(
    post,
    path = "/api/contacts",
    request_body = CreateContactPayload,
    responses(
        (status = 201, description = "Contact created", body = Contact),
        (status = 400, description = "Validation failed")
    ),
    tag = "contacts"
)]
pub async fn create_contact(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateContactPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let now = Utc::now();
    let contact = Contact {
        id: Uuid::new_v4(),
        name: payload.name.trim().to_string(),
        contact_type: payload.contact_type,
        label: payload.label.trim().to_string(),
        value: payload.value.trim().to_string(),
        href: payload.href.trim().to_string(),
        icon: payload.icon.filter(|i| !i.trim().is_empty()),
        icon_type: payload.icon_type.unwrap_or(IconType::Image),
        color: payload
            .color
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONTACT_COLOR.to_string()),
        order: payload.order.unwrap_or(0),
        is_active: payload.is_active.unwrap_or(true),
        created_at: now,
        updated_at: now,
    };

    let created = state.contacts.insert(&contact).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(created, "Contact created successfully")),
    ))
}

#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    params(("id" = Uuid, Path, description = "Contact id")),
    request_body = UpdateContactPayload,
    responses(
        (status = 200, description = "Contact updated", body = Contact),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "No contact with that id")
    ),
    tag = "contacts"
)]
pub async fn update_contact(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateContactPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut contact = state.contacts.find(id).await?;

    if let Some(name) = payload.name {
        contact.name = name.trim().to_string();
    }
    if let Some(contact_type) = payload.contact_type {
        contact.contact_type = contact_type;
    }
    if let Some(label) = payload.label {
        contact.label = label.trim().to_string();
    }
    if let Some(value) = payload.value {
        contact.value = value.trim().to_string();
    }
    if let Some(href) = payload.href {
        contact.href = href.trim().to_string();
    }
    if let Some(icon) = payload.icon {
        // empty string resets to "no icon"
        contact.icon = if icon.trim().is_empty() { None } else { Some(icon) };
    }
    if let Some(icon_type) = payload.icon_type {
        contact.icon_type = icon_type;
    }
    if let Some(color) = payload.color {
        // empty string resets to the default tint
        contact.color = if color.trim().is_empty() {
            DEFAULT_CONTACT_COLOR.to_string()
        } else {
            color
        };
    }
    if let Some(order) = payload.order {
        contact.order = order;
    }
    if let Some(is_active) = payload.is_active {
        contact.is_active = is_active;
    }

    contact.updated_at = Utc::now();
    let updated = state.contacts.update(&contact).await?;
    Ok(Json(ApiResponse::ok_with_message(updated, "Contact updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    params(("id" = Uuid, Path, description = "Contact id")),
    responses(
        (status = 200, description = "Contact deleted"),
        (status = 404, description = "No contact with that id")
    ),
    tag = "contacts"
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.contacts.delete(id).await?;
    Ok(Json(ApiResponse::message("Contact deleted successfully")))
}
