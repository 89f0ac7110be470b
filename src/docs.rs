// src/docs.rs

use axum::Json;
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Banners ---
        handlers::banners::list_banners,
        handlers::banners::get_banner,
        handlers::banners::get_banner_by_page,
        handlers::banners::create_banner,
        handlers::banners::update_banner,
        handlers::banners::delete_banner,

        // --- Contacts ---
        handlers::contacts::list_contacts,
        handlers::contacts::list_active_contacts,
        handlers::contacts::get_contact,
        handlers::contacts::create_contact,
        handlers::contacts::update_contact,
        handlers::contacts::delete_contact,

        // --- Products ---
        handlers::products::list_products,
        handlers::products::get_product,
        handlers::products::get_product_by_slug,
        handlers::products::create_product,
        handlers::products::update_product,
        handlers::products::delete_product,

        // --- News ---
        handlers::news::list_articles,
        handlers::news::get_article,
        handlers::news::get_article_by_slug,
        handlers::news::create_article,
        handlers::news::update_article,
        handlers::news::delete_article,

        // --- Quotes ---
        handlers::quotes::list_quotes,
        handlers::quotes::get_quote,
        handlers::quotes::create_quote,
        handlers::quotes::update_quote,
        handlers::quotes::delete_quote,

        // --- Uploads ---
        handlers::uploads::upload_image,
    ),
    components(
        schemas(
            models::banner::Banner,
            models::banner::BannerPage,
            models::contact::Contact,
            models::contact::ContactType,
            models::contact::IconType,
            models::product::Product,
            models::product::ProductType,
            models::news::NewsArticle,
            models::quote::QuoteRequest,
            models::quote::QuoteStatus,

            // --- Payloads ---
            handlers::banners::CreateBannerPayload,
            handlers::banners::UpdateBannerPayload,
            handlers::contacts::CreateContactPayload,
            handlers::contacts::UpdateContactPayload,
            handlers::products::CreateProductPayload,
            handlers::products::UpdateProductPayload,
            handlers::news::CreateArticlePayload,
            handlers::news::UpdateArticlePayload,
            handlers::quotes::CreateQuotePayload,
            handlers::quotes::UpdateQuotePayload,
            handlers::uploads::UploadedFile,
        )
    ),
    tags(
        (name = "banners", description = "Hero banners per site section"),
        (name = "contacts", description = "Contact channels shown in the footer and contact page"),
        (name = "products", description = "Export product catalog"),
        (name = "news", description = "News and handbook articles"),
        (name = "quotes", description = "Quote requests from the public form"),
        (name = "uploads", description = "Image uploads")
    ),
    info(
        title = "AgriViet API",
        description = "REST backend for the AgriViet marketing site. Every \
            endpoint answers with the `{success, data, message, error, count}` \
            envelope; the schemas below describe the `data` payloads."
    )
)]
pub struct ApiDoc;

/// Serves the raw document at `/api/docs/openapi.json`.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
