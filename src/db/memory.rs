// src/db/memory.rs

//! In-memory backends for the store traits, used by the test suite and by
//! local development when no `DATABASE_URL` is configured. Rows live in a
//! plain `Vec` behind an async lock and do not survive a restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::db::banner_repo::{BannerStore, BANNER_NOT_FOUND, PAGE_BANNER_NOT_FOUND};
use crate::db::contact_repo::{ContactStore, CONTACT_NOT_FOUND};
use crate::db::news_repo::{NewsStore, ARTICLE_NOT_FOUND};
use crate::db::product_repo::{ProductStore, PRODUCT_NOT_FOUND};
use crate::db::quote_repo::{QuoteStore, QUOTE_NOT_FOUND};
use crate::db::SlugIndex;
use crate::models::banner::{Banner, BannerPage};
use crate::models::contact::{Contact, ContactType};
use crate::models::news::NewsArticle;
use crate::models::product::{Product, ProductType};
use crate::models::quote::{QuoteRequest, QuoteStatus};

#[derive(Default)]
pub struct MemoryBanners {
    rows: RwLock<Vec<Banner>>,
}

#[async_trait]
impl SlugIndex for MemoryBanners {
    async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, AppError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .any(|b| b.slug.as_deref() == Some(slug) && Some(b.id) != exclude))
    }
}

#[async_trait]
impl BannerStore for MemoryBanners {
    async fn list(
        &self,
        is_active: Option<bool>,
        page: Option<BannerPage>,
    ) -> Result<Vec<Banner>, AppError> {
        let rows = self.rows.read().await;
        let mut banners: Vec<Banner> = rows
            .iter()
            .filter(|b| is_active.is_none_or(|v| b.is_active == v))
            .filter(|b| page.is_none_or(|p| b.page == p))
            .cloned()
            .collect();
        banners.sort_by(|a, b| a.order.cmp(&b.order).then(b.created_at.cmp(&a.created_at)));
        Ok(banners)
    }

    async fn find(&self, id: Uuid) -> Result<Banner, AppError> {
        let rows = self.rows.read().await;
        rows.iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(AppError::NotFound(BANNER_NOT_FOUND))
    }

    async fn find_for_page(&self, page: BannerPage) -> Result<Banner, AppError> {
        self.list(Some(true), Some(page))
            .await?
            .into_iter()
            .next()
            .ok_or(AppError::NotFound(PAGE_BANNER_NOT_FOUND))
    }

    async fn insert(&self, banner: &Banner) -> Result<Banner, AppError> {
        let mut rows = self.rows.write().await;
        if let Some(slug) = &banner.slug {
            if rows.iter().any(|b| b.slug.as_deref() == Some(slug.as_str())) {
                return Err(AppError::DuplicateSlug(slug.clone()));
            }
        }
        rows.push(banner.clone());
        Ok(banner.clone())
    }

    async fn update(&self, banner: &Banner) -> Result<Banner, AppError> {
        let mut rows = self.rows.write().await;
        if let Some(slug) = &banner.slug {
            if rows
                .iter()
                .any(|b| b.id != banner.id && b.slug.as_deref() == Some(slug.as_str()))
            {
                return Err(AppError::DuplicateSlug(slug.clone()));
            }
        }
        let row = rows
            .iter_mut()
            .find(|b| b.id == banner.id)
            .ok_or(AppError::NotFound(BANNER_NOT_FOUND))?;
        *row = banner.clone();
        Ok(banner.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|b| b.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound(BANNER_NOT_FOUND));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryContacts {
    rows: RwLock<Vec<Contact>>,
}

#[async_trait]
impl ContactStore for MemoryContacts {
    async fn list(
        &self,
        is_active: Option<bool>,
        contact_type: Option<ContactType>,
    ) -> Result<Vec<Contact>, AppError> {
        let rows = self.rows.read().await;
        let mut contacts: Vec<Contact> = rows
            .iter()
            .filter(|c| is_active.is_none_or(|v| c.is_active == v))
            .filter(|c| contact_type.is_none_or(|t| c.contact_type == t))
            .cloned()
            .collect();
        contacts.sort_by(|a, b| a.order.cmp(&b.order).then(b.created_at.cmp(&a.created_at)));
        Ok(contacts)
    }

    async fn find(&self, id: Uuid) -> Result<Contact, AppError> {
        let rows = self.rows.read().await;
        rows.iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(AppError::NotFound(CONTACT_NOT_FOUND))
    }

    async fn insert(&self, contact: &Contact) -> Result<Contact, AppError> {
        let mut rows = self.rows.write().await;
        rows.push(contact.clone());
        Ok(contact.clone())
    }

    async fn update(&self, contact: &Contact) -> Result<Contact, AppError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|c| c.id == contact.id)
            .ok_or(AppError::NotFound(CONTACT_NOT_FOUND))?;
        *row = contact.clone();
        Ok(contact.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound(CONTACT_NOT_FOUND));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryProducts {
    rows: RwLock<Vec<Product>>,
}

#[async_trait]
impl SlugIndex for MemoryProducts {
    async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, AppError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .any(|p| p.slug.as_deref() == Some(slug) && Some(p.id) != exclude))
    }
}

#[async_trait]
impl ProductStore for MemoryProducts {
    async fn list(
        &self,
        is_active: Option<bool>,
        product_type: Option<ProductType>,
    ) -> Result<Vec<Product>, AppError> {
        let rows = self.rows.read().await;
        let mut products: Vec<Product> = rows
            .iter()
            .filter(|p| is_active.is_none_or(|v| p.is_active == v))
            .filter(|p| product_type.is_none_or(|t| p.product_type == t))
            .cloned()
            .collect();
        products.sort_by(|a, b| a.order.cmp(&b.order).then(b.created_at.cmp(&a.created_at)));
        Ok(products)
    }

    async fn find(&self, id: Uuid) -> Result<Product, AppError> {
        let rows = self.rows.read().await;
        rows.iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(AppError::NotFound(PRODUCT_NOT_FOUND))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Product, AppError> {
        let rows = self.rows.read().await;
        rows.iter()
            .find(|p| p.slug.as_deref() == Some(slug))
            .cloned()
            .ok_or(AppError::NotFound(PRODUCT_NOT_FOUND))
    }

    async fn insert(&self, product: &Product) -> Result<Product, AppError> {
        let mut rows = self.rows.write().await;
        if let Some(slug) = &product.slug {
            if rows.iter().any(|p| p.slug.as_deref() == Some(slug.as_str())) {
                return Err(AppError::DuplicateSlug(slug.clone()));
            }
        }
        rows.push(product.clone());
        Ok(product.clone())
    }

    async fn update(&self, product: &Product) -> Result<Product, AppError> {
        let mut rows = self.rows.write().await;
        if let Some(slug) = &product.slug {
            if rows
                .iter()
                .any(|p| p.id != product.id && p.slug.as_deref() == Some(slug.as_str()))
            {
                return Err(AppError::DuplicateSlug(slug.clone()));
            }
        }
        let row = rows
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(AppError::NotFound(PRODUCT_NOT_FOUND))?;
        *row = product.clone();
        Ok(product.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound(PRODUCT_NOT_FOUND));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryNews {
    rows: RwLock<Vec<NewsArticle>>,
}

#[async_trait]
impl SlugIndex for MemoryNews {
    async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, AppError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .any(|a| a.slug.as_deref() == Some(slug) && Some(a.id) != exclude))
    }
}

#[async_trait]
impl NewsStore for MemoryNews {
    async fn list(&self, is_published: Option<bool>) -> Result<Vec<NewsArticle>, AppError> {
        let rows = self.rows.read().await;
        let mut articles: Vec<NewsArticle> = rows
            .iter()
            .filter(|a| is_published.is_none_or(|v| a.is_published == v))
            .cloned()
            .collect();
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(articles)
    }

    async fn find(&self, id: Uuid) -> Result<NewsArticle, AppError> {
        let rows = self.rows.read().await;
        rows.iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(AppError::NotFound(ARTICLE_NOT_FOUND))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<NewsArticle, AppError> {
        let rows = self.rows.read().await;
        rows.iter()
            .find(|a| a.slug.as_deref() == Some(slug))
            .cloned()
            .ok_or(AppError::NotFound(ARTICLE_NOT_FOUND))
    }

    async fn insert(&self, article: &NewsArticle) -> Result<NewsArticle, AppError> {
        let mut rows = self.rows.write().await;
        if let Some(slug) = &article.slug {
            if rows.iter().any(|a| a.slug.as_deref() == Some(slug.as_str())) {
                return Err(AppError::DuplicateSlug(slug.clone()));
            }
        }
        rows.push(article.clone());
        Ok(article.clone())
    }

    async fn update(&self, article: &NewsArticle) -> Result<NewsArticle, AppError> {
        let mut rows = self.rows.write().await;
        if let Some(slug) = &article.slug {
            if rows
                .iter()
                .any(|a| a.id != article.id && a.slug.as_deref() == Some(slug.as_str()))
            {
                return Err(AppError::DuplicateSlug(slug.clone()));
            }
        }
        let row = rows
            .iter_mut()
            .find(|a| a.id == article.id)
            .ok_or(AppError::NotFound(ARTICLE_NOT_FOUND))?;
        *row = article.clone();
        Ok(article.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|a| a.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound(ARTICLE_NOT_FOUND));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryQuotes {
    rows: RwLock<Vec<QuoteRequest>>,
}

#[async_trait]
impl QuoteStore for MemoryQuotes {
    async fn list(&self, status: Option<QuoteStatus>) -> Result<Vec<QuoteRequest>, AppError> {
        let rows = self.rows.read().await;
        let mut quotes: Vec<QuoteRequest> = rows
            .iter()
            .filter(|q| status.is_none_or(|s| q.status == s))
            .cloned()
            .collect();
        quotes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(quotes)
    }

    async fn find(&self, id: Uuid) -> Result<QuoteRequest, AppError> {
        let rows = self.rows.read().await;
        rows.iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or(AppError::NotFound(QUOTE_NOT_FOUND))
    }

    async fn insert(&self, quote: &QuoteRequest) -> Result<QuoteRequest, AppError> {
        let mut rows = self.rows.write().await;
        rows.push(quote.clone());
        Ok(quote.clone())
    }

    async fn update(&self, quote: &QuoteRequest) -> Result<QuoteRequest, AppError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|q| q.id == quote.id)
            .ok_or(AppError::NotFound(QUOTE_NOT_FOUND))?;
        *row = quote.clone();
        Ok(quote.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|q| q.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound(QUOTE_NOT_FOUND));
        }
        Ok(())
    }
}
