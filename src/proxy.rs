// src/proxy.rs

//! The frontend-facing pass-through. Every `/api` request is re-issued
//! against the backend base URL byte-for-byte: same method, same query
//! string, same body, same content type. Multipart uploads in particular are
//! never re-parsed, so the boundary in the original content-type header
//! stays valid.

use std::env;

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use thiserror::Error;
use tower_http::trace::TraceLayer;

use crate::common::response::ApiResponse;

/// Settings for the proxy binary, read from the environment.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub port: u16,
    pub backend_url: String,
}

impl ProxyConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let port = env::var("PROXY_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);
        let backend_url =
            env::var("BACKEND_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());

        Self { port, backend_url }
    }
}

#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    backend_url: String,
}

impl ProxyState {
    pub fn new(backend_url: impl Into<String>) -> Self {
        let mut backend_url = backend_url.into();
        while backend_url.ends_with('/') {
            backend_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            backend_url,
        }
    }
}

#[derive(Debug, Error)]
enum ProxyError {
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("failed to buffer request body: {0}")]
    Body(#[from] axum::Error),

    #[error(transparent)]
    Http(#[from] axum::http::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ProxyError::Upstream(_) => (StatusCode::BAD_GATEWAY, "Backend unreachable"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Proxy error"),
        };
        tracing::error!("proxy failure: {self}");
        (status, Json(ApiResponse::error(message, Some(self.to_string())))).into_response()
    }
}

pub fn proxy_router(state: ProxyState) -> Router {
    Router::new()
        .route("/api", any(forward))
        .route("/api/{*rest}", any(forward))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn forward(
    State(state): State<ProxyState>,
    req: Request,
) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();

    let target = match parts.uri.path_and_query() {
        Some(pq) => format!("{}{}", state.backend_url, pq),
        None => state.backend_url.clone(),
    };

    // The body is buffered whole rather than streamed; upload payloads are
    // bounded by the backend's limits anyway.
    let bytes = to_bytes(body, usize::MAX).await?;

    let mut headers = parts.headers;
    headers.remove(header::HOST);
    headers.remove(header::CONTENT_LENGTH);

    let upstream = state
        .client
        .request(parts.method, &target)
        .headers(headers)
        .body(bytes)
        .send()
        .await?;

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let payload = upstream.bytes().await?;

    let mut response = Response::builder().status(status);
    if let Some(ct) = content_type {
        response = response.header(header::CONTENT_TYPE, ct);
    }
    Ok(response.body(Body::from(payload))?)
}
