pub mod banner_repo;
pub use banner_repo::{BannerStore, PgBannerStore};
pub mod contact_repo;
pub use contact_repo::{ContactStore, PgContactStore};
pub mod product_repo;
pub use product_repo::{PgProductStore, ProductStore};
pub mod news_repo;
pub use news_repo::{NewsStore, PgNewsStore};
pub mod quote_repo;
pub use quote_repo::{PgQuoteStore, QuoteStore};
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::common::slug::slugify;

/// Remaps a Postgres unique violation on a slug column onto the 400-class
/// duplicate-slug error; everything else stays a database error.
pub(crate) fn slug_conflict(err: sqlx::Error, slug: Option<&str>) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AppError::DuplicateSlug(slug.unwrap_or_default().to_string());
        }
    }
    err.into()
}

/// Collision lookup shared by every slugged resource, so the derivation
/// policy below can run against any of their stores.
#[async_trait]
pub trait SlugIndex: Send + Sync {
    /// True when `slug` is already used by a row other than `exclude`.
    async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, AppError>;
}

/// Derives a unique slug from a display name: slugify, then append `-1`,
/// `-2`, ... until no other row holds the candidate.
///
/// Returns `None` when the name folds down to nothing, in which case the
/// resource simply keeps no slug.
pub async fn unique_slug(
    index: &dyn SlugIndex,
    name: &str,
    exclude: Option<Uuid>,
) -> Result<Option<String>, AppError> {
    let base = slugify(name);
    if base.is_empty() {
        return Ok(None);
    }
    if !index.slug_taken(&base, exclude).await? {
        return Ok(Some(base));
    }
    let mut n = 1u32;
    loop {
        let candidate = format!("{base}-{n}");
        if !index.slug_taken(&candidate, exclude).await? {
            return Ok(Some(candidate));
        }
        n += 1;
    }
}
