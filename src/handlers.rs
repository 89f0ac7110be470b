pub mod banners;
pub mod contacts;
pub mod news;
pub mod products;
pub mod quotes;
pub mod uploads;

use uuid::Uuid;
use validator::ValidationError;

use crate::common::error::AppError;
use crate::db::{unique_slug, SlugIndex};

/// Rejects values that are empty after trimming; `length(min = 1)` alone
/// would let all-whitespace strings through.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Slug policy for newly created rows: an explicit non-blank slug is trimmed,
/// lowercased and checked for collisions; anything else derives the slug from
/// the display name.
pub(crate) async fn resolve_new_slug(
    index: &dyn SlugIndex,
    requested: Option<&str>,
    name: &str,
) -> Result<Option<String>, AppError> {
    match requested.map(str::trim) {
        Some(s) if !s.is_empty() => {
            let slug = s.to_lowercase();
            if index.slug_taken(&slug, None).await? {
                return Err(AppError::DuplicateSlug(slug));
            }
            Ok(Some(slug))
        }
        _ => unique_slug(index, name, None).await,
    }
}

/// Slug policy for updates, mirroring the pre-save behavior of the site's
/// content models: an explicit value wins, an empty string clears the field,
/// and a cleared (or never set) slug is re-derived from the current name.
pub(crate) async fn resolve_updated_slug(
    index: &dyn SlugIndex,
    current: Option<String>,
    requested: Option<&str>,
    name: &str,
    id: Uuid,
) -> Result<Option<String>, AppError> {
    let mut slug = match requested.map(str::trim) {
        None => current,
        Some("") => None,
        Some(s) => {
            let s = s.to_lowercase();
            if index.slug_taken(&s, Some(id)).await? {
                return Err(AppError::DuplicateSlug(s));
            }
            Some(s)
        }
    };
    if slug.is_none() {
        slug = unique_slug(index, name, Some(id)).await?;
    }
    Ok(slug)
}
