// src/routes.rs

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::AppState;
use crate::docs;
use crate::handlers;

/// Assembles the whole API surface. The frontend talks to this router either
/// directly or through its proxy, so everything lives under `/api` except the
/// static uploads mount.
pub fn api_router(state: AppState) -> Router {
    let banner_routes = Router::new()
        .route(
            "/",
            get(handlers::banners::list_banners).post(handlers::banners::create_banner),
        )
        .route("/page/{page}", get(handlers::banners::get_banner_by_page))
        .route(
            "/{id}",
            get(handlers::banners::get_banner)
                .put(handlers::banners::update_banner)
                .delete(handlers::banners::delete_banner),
        );

    let contact_routes = Router::new()
        .route(
            "/",
            get(handlers::contacts::list_contacts).post(handlers::contacts::create_contact),
        )
        .route("/active", get(handlers::contacts::list_active_contacts))
        .route(
            "/{id}",
            get(handlers::contacts::get_contact)
                .put(handlers::contacts::update_contact)
                .delete(handlers::contacts::delete_contact),
        );

    let product_routes = Router::new()
        .route(
            "/",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route("/slug/{slug}", get(handlers::products::get_product_by_slug))
        .route(
            "/{id}",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        );

    let news_routes = Router::new()
        .route(
            "/",
            get(handlers::news::list_articles).post(handlers::news::create_article),
        )
        .route("/slug/{slug}", get(handlers::news::get_article_by_slug))
        .route(
            "/{id}",
            get(handlers::news::get_article)
                .put(handlers::news::update_article)
                .delete(handlers::news::delete_article),
        );

    let quote_routes = Router::new()
        .route(
            "/",
            get(handlers::quotes::list_quotes).post(handlers::quotes::create_quote),
        )
        .route(
            "/{id}",
            get(handlers::quotes::get_quote)
                .put(handlers::quotes::update_quote)
                .delete(handlers::quotes::delete_quote),
        );

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/docs/openapi.json", get(docs::openapi_json))
        .route("/api/upload", post(handlers::uploads::upload_image))
        .nest("/api/banners", banner_routes)
        .nest("/api/contacts", contact_routes)
        .nest("/api/products", product_routes)
        .nest("/api/news", news_routes)
        .nest("/api/quotes", quote_routes)
        .nest_service("/uploads", ServeDir::new(&state.uploads_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
