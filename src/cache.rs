// src/cache.rs

//! File-backed cache of the storefront product lists.
//!
//! The site renders three product sections (fresh, frozen, dried) on almost
//! every page, so their lists are kept in memory and mirrored to a JSON file
//! that survives restarts. Invalidation is one declarative [`CachePolicy`]:
//! a key, a TTL and a schema version. On open, a mirror written under a
//! different schema version is discarded wholesale.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::client::{ApiClient, ClientError};
use crate::models::product::{Product, ProductType};

/// Bump whenever the cached product shape changes between deployments.
pub const CACHE_SCHEMA_VERSION: u32 = 2;

const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// The whole invalidation story in one value.
#[derive(Debug, Clone)]
pub struct CachePolicy {
    /// Name of the mirror file, without extension.
    pub key: &'static str,
    /// Entries older than this are refetched on access.
    pub ttl: Duration,
    pub schema_version: u32,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            key: "products",
            ttl: DEFAULT_TTL,
            schema_version: CACHE_SCHEMA_VERSION,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CachedList {
    fetched_at: DateTime<Utc>,
    products: Vec<Product>,
}

/// On-disk layout of the mirror file, same JSON dialect as the API.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CacheFile {
    schema_version: u32,
    lists: HashMap<ProductType, CachedList>,
}

/// Entry age; a timestamp from a clock ahead of ours counts as zero.
fn age_of(fetched_at: DateTime<Utc>) -> Duration {
    Utc::now()
        .signed_duration_since(fetched_at)
        .to_std()
        .unwrap_or_default()
}

async fn load_mirror(
    path: &Path,
    expected_version: u32,
) -> Option<HashMap<ProductType, CachedList>> {
    let raw = tokio::fs::read(path).await.ok()?;
    let file: CacheFile = match serde_json::from_slice(&raw) {
        Ok(file) => file,
        Err(err) => {
            tracing::warn!("discarding unreadable product cache {}: {err}", path.display());
            let _ = tokio::fs::remove_file(path).await;
            return None;
        }
    };
    if file.schema_version != expected_version {
        tracing::info!(
            "product cache schema {} != expected {}, clearing",
            file.schema_version,
            expected_version
        );
        let _ = tokio::fs::remove_file(path).await;
        return None;
    }
    Some(file.lists)
}

pub struct ProductCache {
    client: ApiClient,
    policy: CachePolicy,
    path: PathBuf,
    lists: Mutex<HashMap<ProductType, CachedList>>,
}

impl ProductCache {
    /// Open the cache in `dir`, loading whatever valid mirror is already
    /// there.
    pub async fn open(client: ApiClient, dir: impl AsRef<Path>, policy: CachePolicy) -> Self {
        let path = dir.as_ref().join(format!("{}.json", policy.key));
        let lists = load_mirror(&path, policy.schema_version)
            .await
            .unwrap_or_default();
        Self {
            client,
            policy,
            path,
            lists: Mutex::new(lists),
        }
    }

    /// Active products of one type. A hit younger than the TTL skips the
    /// network entirely unless `force` is set.
    ///
    /// Concurrent misses for the same list may fetch twice; the later insert
    /// wins. There is no retry, a failed fetch surfaces its error and leaves
    /// any stale entry in place.
    pub async fn products(
        &self,
        product_type: ProductType,
        force: bool,
    ) -> Result<Vec<Product>, ClientError> {
        if !force {
            let lists = self.lists.lock().await;
            if let Some(cached) = lists.get(&product_type) {
                if age_of(cached.fetched_at) < self.policy.ttl {
                    return Ok(cached.products.clone());
                }
            }
        }

        let products = self.client.products(Some(true), Some(product_type)).await?;

        let mut lists = self.lists.lock().await;
        lists.insert(
            product_type,
            CachedList {
                fetched_at: Utc::now(),
                products: products.clone(),
            },
        );
        self.persist(&lists).await;
        Ok(products)
    }

    /// Fetch all three lists at once, the way the landing page does.
    pub async fn warm(&self, force: bool) -> Result<(), ClientError> {
        tokio::try_join!(
            self.products(ProductType::Fresh, force),
            self.products(ProductType::Frozen, force),
            self.products(ProductType::Dried, force),
        )?;
        Ok(())
    }

    /// Drop everything, memory and mirror.
    pub async fn clear(&self) {
        let mut lists = self.lists.lock().await;
        lists.clear();
        let _ = tokio::fs::remove_file(&self.path).await;
    }

    /// Best-effort write of the mirror; a failure is logged and ignored.
    async fn persist(&self, lists: &HashMap<ProductType, CachedList>) {
        let file = CacheFile {
            schema_version: self.policy.schema_version,
            lists: lists.clone(),
        };
        let bytes = match serde_json::to_vec(&file) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!("failed to encode product cache: {err}");
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            if let Err(err) = tokio::fs::create_dir_all(parent).await {
                tracing::warn!("failed to create cache dir {}: {err}", parent.display());
                return;
            }
        }
        if let Err(err) = tokio::fs::write(&self.path, bytes).await {
            tracing::warn!("failed to write product cache {}: {err}", self.path.display());
        }
    }
}
