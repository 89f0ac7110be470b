// src/client.rs

//! Typed wrappers over the REST surface, one method per endpoint.
//!
//! Every call unwraps the response envelope: `success: false` surfaces as a
//! [`ClientError::Api`] carrying the server's own message, so callers never
//! look at the envelope themselves.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

use crate::common::response::ApiResponse;
use crate::handlers::banners::{CreateBannerPayload, UpdateBannerPayload};
use crate::handlers::contacts::{CreateContactPayload, UpdateContactPayload};
use crate::handlers::news::{CreateArticlePayload, UpdateArticlePayload};
use crate::handlers::products::{CreateProductPayload, UpdateProductPayload};
use crate::handlers::quotes::{CreateQuotePayload, UpdateQuotePayload};
use crate::models::banner::{Banner, BannerPage};
use crate::models::contact::{Contact, ContactType};
use crate::models::news::NewsArticle;
use crate::models::product::{Product, ProductType};
use crate::models::quote::{QuoteRequest, QuoteStatus};

#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure, or a response that is not the expected envelope.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with `success: false`.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// A successful envelope arrived without its `data` field.
    #[error("response carried no data")]
    MissingData,
}

fn api_failure<T>(status: StatusCode, envelope: &ApiResponse<T>) -> Option<ClientError> {
    if envelope.success {
        return None;
    }
    let message = envelope
        .message
        .clone()
        .or_else(|| envelope.error.clone())
        .unwrap_or_else(|| "request failed".to_string());
    Some(ClientError::Api { status, message })
}

async fn read_data<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    let envelope: ApiResponse<T> = response.json().await?;
    if let Some(err) = api_failure(status, &envelope) {
        return Err(err);
    }
    envelope.data.ok_or(ClientError::MissingData)
}

/// For delete-style endpoints whose envelope carries only a confirmation.
async fn read_message(response: reqwest::Response) -> Result<String, ClientError> {
    let status = response.status();
    let envelope: ApiResponse<()> = response.json().await?;
    if let Some(err) = api_failure(status, &envelope) {
        return Err(err);
    }
    Ok(envelope.message.unwrap_or_default())
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // --- Banners ---

    pub async fn banners(
        &self,
        is_active: Option<bool>,
        page: Option<BannerPage>,
    ) -> Result<Vec<Banner>, ClientError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(active) = is_active {
            query.push(("isActive", active.to_string()));
        }
        if let Some(page) = page {
            query.push(("page", page.as_str().to_string()));
        }
        let response = self
            .http
            .get(self.url("/api/banners"))
            .query(&query)
            .send()
            .await?;
        read_data(response).await
    }

    pub async fn banner(&self, id: Uuid) -> Result<Banner, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/banners/{id}")))
            .send()
            .await?;
        read_data(response).await
    }

    /// The single active banner shown on a site section.
    pub async fn banner_for_page(&self, page: BannerPage) -> Result<Banner, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/banners/page/{}", page.as_str())))
            .send()
            .await?;
        read_data(response).await
    }

    pub async fn create_banner(
        &self,
        payload: &CreateBannerPayload,
    ) -> Result<Banner, ClientError> {
        let response = self
            .http
            .post(self.url("/api/banners"))
            .json(payload)
            .send()
            .await?;
        read_data(response).await
    }

    pub async fn update_banner(
        &self,
        id: Uuid,
        payload: &UpdateBannerPayload,
    ) -> Result<Banner, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/api/banners/{id}")))
            .json(payload)
            .send()
            .await?;
        read_data(response).await
    }

    pub async fn delete_banner(&self, id: Uuid) -> Result<String, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/banners/{id}")))
            .send()
            .await?;
        read_message(response).await
    }

    // --- Contacts ---

    pub async fn contacts(
        &self,
        is_active: Option<bool>,
        contact_type: Option<ContactType>,
    ) -> Result<Vec<Contact>, ClientError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(active) = is_active {
            query.push(("isActive", active.to_string()));
        }
        if let Some(kind) = contact_type {
            query.push(("type", kind.as_str().to_string()));
        }
        let response = self
            .http
            .get(self.url("/api/contacts"))
            .query(&query)
            .send()
            .await?;
        read_data(response).await
    }

    /// Active contacts in display order, as the site footer shows them.
    pub async fn active_contacts(&self) -> Result<Vec<Contact>, ClientError> {
        let response = self
            .http
            .get(self.url("/api/contacts/active"))
            .send()
            .await?;
        read_data(response).await
    }

    pub async fn contact(&self, id: Uuid) -> Result<Contact, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/contacts/{id}")))
            .send()
            .await?;
        read_data(response).await
    }

    pub async fn create_contact(
        &self,
        payload: &CreateContactPayload,
    ) -> Result<Contact, ClientError> {
        let response = self
            .http
            .post(self.url("/api/contacts"))
            .json(payload)
            .send()
            .await?;
        read_data(response).await
    }

    pub async fn update_contact(
        &self,
        id: Uuid,
        payload: &UpdateContactPayload,
    ) -> Result<Contact, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/api/contacts/{id}")))
            .json(payload)
            .send()
            .await?;
        read_data(response).await
    }

    pub async fn delete_contact(&self, id: Uuid) -> Result<String, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/contacts/{id}")))
            .send()
            .await?;
        read_message(response).await
    }

    // --- Products ---

    pub async fn products(
        &self,
        is_active: Option<bool>,
        product_type: Option<ProductType>,
    ) -> Result<Vec<Product>, ClientError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(active) = is_active {
            query.push(("isActive", active.to_string()));
        }
        if let Some(kind) = product_type {
            query.push(("type", kind.as_str().to_string()));
        }
        let response = self
            .http
            .get(self.url("/api/products"))
            .query(&query)
            .send()
            .await?;
        read_data(response).await
    }

    pub async fn product(&self, id: Uuid) -> Result<Product, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/products/{id}")))
            .send()
            .await?;
        read_data(response).await
    }

    pub async fn product_by_slug(&self, slug: &str) -> Result<Product, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/products/slug/{slug}")))
            .send()
            .await?;
        read_data(response).await
    }

    pub async fn create_product(
        &self,
        payload: &CreateProductPayload,
    ) -> Result<Product, ClientError> {
        let response = self
            .http
            .post(self.url("/api/products"))
            .json(payload)
            .send()
            .await?;
        read_data(response).await
    }

    pub async fn update_product(
        &self,
        id: Uuid,
        payload: &UpdateProductPayload,
    ) -> Result<Product, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/api/products/{id}")))
            .json(payload)
            .send()
            .await?;
        read_data(response).await
    }

    pub async fn delete_product(&self, id: Uuid) -> Result<String, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/products/{id}")))
            .send()
            .await?;
        read_message(response).await
    }

    // --- News ---

    pub async fn news(&self, is_published: Option<bool>) -> Result<Vec<NewsArticle>, ClientError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(published) = is_published {
            query.push(("isPublished", published.to_string()));
        }
        let response = self
            .http
            .get(self.url("/api/news"))
            .query(&query)
            .send()
            .await?;
        read_data(response).await
    }

    pub async fn article(&self, id: Uuid) -> Result<NewsArticle, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/news/{id}")))
            .send()
            .await?;
        read_data(response).await
    }

    pub async fn article_by_slug(&self, slug: &str) -> Result<NewsArticle, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/news/slug/{slug}")))
            .send()
            .await?;
        read_data(response).await
    }

    pub async fn create_article(
        &self,
        payload: &CreateArticlePayload,
    ) -> Result<NewsArticle, ClientError> {
        let response = self
            .http
            .post(self.url("/api/news"))
            .json(payload)
            .send()
            .await?;
        read_data(response).await
    }

    pub async fn update_article(
        &self,
        id: Uuid,
        payload: &UpdateArticlePayload,
    ) -> Result<NewsArticle, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/api/news/{id}")))
            .json(payload)
            .send()
            .await?;
        read_data(response).await
    }

    pub async fn delete_article(&self, id: Uuid) -> Result<String, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/news/{id}")))
            .send()
            .await?;
        read_message(response).await
    }

    // --- Quote requests ---

    pub async fn quotes(&self, status: Option<QuoteStatus>) -> Result<Vec<QuoteRequest>, ClientError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(status) = status {
            query.push(("status", status.as_str().to_string()));
        }
        let response = self
            .http
            .get(self.url("/api/quotes"))
            .query(&query)
            .send()
            .await?;
        read_data(response).await
    }

    pub async fn quote(&self, id: Uuid) -> Result<QuoteRequest, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/quotes/{id}")))
            .send()
            .await?;
        read_data(response).await
    }

    /// What the public quote form posts.
    pub async fn submit_quote(
        &self,
        payload: &CreateQuotePayload,
    ) -> Result<QuoteRequest, ClientError> {
        let response = self
            .http
            .post(self.url("/api/quotes"))
            .json(payload)
            .send()
            .await?;
        read_data(response).await
    }

    pub async fn update_quote(
        &self,
        id: Uuid,
        payload: &UpdateQuotePayload,
    ) -> Result<QuoteRequest, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/api/quotes/{id}")))
            .json(payload)
            .send()
            .await?;
        read_data(response).await
    }

    pub async fn delete_quote(&self, id: Uuid) -> Result<String, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/quotes/{id}")))
            .send()
            .await?;
        read_message(response).await
    }
}
