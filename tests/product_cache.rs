//! TTL, force-refresh and schema-version behavior of the product cache.

mod common;

use std::time::Duration;

use agriviet_backend::cache::{CachePolicy, ProductCache, CACHE_SCHEMA_VERSION};
use agriviet_backend::client::ApiClient;
use agriviet_backend::handlers::products::CreateProductPayload;
use agriviet_backend::models::product::ProductType;
use serde_json::Value;

use common::spawn_api;

async fn seed_product(client: &ApiClient, name: &str, product_type: ProductType, active: bool) {
    client
        .create_product(&CreateProductPayload {
            name: name.to_string(),
            slug: None,
            product_type,
            description: None,
            image: "p.png".to_string(),
            order: None,
            is_active: Some(active),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn fresh_entries_are_served_without_refetching() {
    let backend = spawn_api().await;
    let client = ApiClient::new(backend.base_url.clone());
    seed_product(&client, "Một", ProductType::Fresh, true).await;

    let dir = tempfile::tempdir().unwrap();
    let cache = ProductCache::open(client.clone(), dir.path(), CachePolicy::default()).await;

    let first = cache.products(ProductType::Fresh, false).await.unwrap();
    assert_eq!(first.len(), 1);

    // the server changes, but the TTL has not elapsed
    seed_product(&client, "Hai", ProductType::Fresh, true).await;
    let second = cache.products(ProductType::Fresh, false).await.unwrap();
    assert_eq!(second.len(), 1, "entries younger than the TTL are served as-is");

    let forced = cache.products(ProductType::Fresh, true).await.unwrap();
    assert_eq!(forced.len(), 2, "force bypasses the TTL");
}

#[tokio::test]
async fn expired_entries_are_refetched() {
    let backend = spawn_api().await;
    let client = ApiClient::new(backend.base_url.clone());
    seed_product(&client, "Một", ProductType::Dried, true).await;

    let dir = tempfile::tempdir().unwrap();
    let policy = CachePolicy {
        ttl: Duration::ZERO,
        ..CachePolicy::default()
    };
    let cache = ProductCache::open(client.clone(), dir.path(), policy).await;

    assert_eq!(cache.products(ProductType::Dried, false).await.unwrap().len(), 1);
    seed_product(&client, "Hai", ProductType::Dried, true).await;
    assert_eq!(cache.products(ProductType::Dried, false).await.unwrap().len(), 2);
}

#[tokio::test]
async fn inactive_products_never_enter_the_cache() {
    let backend = spawn_api().await;
    let client = ApiClient::new(backend.base_url.clone());
    seed_product(&client, "Bán", ProductType::Frozen, true).await;
    seed_product(&client, "Ẩn", ProductType::Frozen, false).await;

    let dir = tempfile::tempdir().unwrap();
    let cache = ProductCache::open(client.clone(), dir.path(), CachePolicy::default()).await;

    let frozen = cache.products(ProductType::Frozen, false).await.unwrap();
    assert_eq!(frozen.len(), 1);
    assert_eq!(frozen[0].name, "Bán");
}

#[tokio::test]
async fn mirror_survives_reopen_until_the_schema_version_bumps() {
    let backend = spawn_api().await;
    let client = ApiClient::new(backend.base_url.clone());
    seed_product(&client, "Một", ProductType::Fresh, true).await;

    let dir = tempfile::tempdir().unwrap();
    {
        let cache = ProductCache::open(client.clone(), dir.path(), CachePolicy::default()).await;
        assert_eq!(cache.products(ProductType::Fresh, false).await.unwrap().len(), 1);
    }
    assert!(dir.path().join("products.json").exists());

    seed_product(&client, "Hai", ProductType::Fresh, true).await;

    // same schema version: the mirrored entry is still fresh, no refetch
    let reopened = ProductCache::open(client.clone(), dir.path(), CachePolicy::default()).await;
    assert_eq!(reopened.products(ProductType::Fresh, false).await.unwrap().len(), 1);

    // bumped schema version: everything is discarded and refetched
    let bumped_policy = CachePolicy {
        schema_version: CACHE_SCHEMA_VERSION + 1,
        ..CachePolicy::default()
    };
    let bumped = ProductCache::open(client.clone(), dir.path(), bumped_policy).await;
    assert_eq!(bumped.products(ProductType::Fresh, false).await.unwrap().len(), 2);
}

#[tokio::test]
async fn warm_fills_all_three_lists_and_the_mirror() {
    let backend = spawn_api().await;
    let client = ApiClient::new(backend.base_url.clone());
    seed_product(&client, "Tươi", ProductType::Fresh, true).await;
    seed_product(&client, "Lạnh", ProductType::Frozen, true).await;
    seed_product(&client, "Sấy", ProductType::Dried, true).await;

    let dir = tempfile::tempdir().unwrap();
    let cache = ProductCache::open(client.clone(), dir.path(), CachePolicy::default()).await;
    cache.warm(false).await.unwrap();

    let raw = tokio::fs::read_to_string(dir.path().join("products.json"))
        .await
        .unwrap();
    let mirror: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(mirror["schemaVersion"], CACHE_SCHEMA_VERSION);
    for key in ["fresh", "frozen", "dried"] {
        assert_eq!(mirror["lists"][key]["products"].as_array().unwrap().len(), 1);
    }
}

#[tokio::test]
async fn clear_drops_memory_and_mirror() {
    let backend = spawn_api().await;
    let client = ApiClient::new(backend.base_url.clone());
    seed_product(&client, "Một", ProductType::Fresh, true).await;

    let dir = tempfile::tempdir().unwrap();
    let cache = ProductCache::open(client.clone(), dir.path(), CachePolicy::default()).await;
    cache.products(ProductType::Fresh, false).await.unwrap();
    assert!(dir.path().join("products.json").exists());

    cache.clear().await;
    assert!(!dir.path().join("products.json").exists());

    // the next read goes back to the network
    seed_product(&client, "Hai", ProductType::Fresh, true).await;
    assert_eq!(cache.products(ProductType::Fresh, false).await.unwrap().len(), 2);
}
