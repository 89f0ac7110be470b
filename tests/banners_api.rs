//! End-to-end behavior of the banner endpoints over the in-memory store:
//! slug derivation, filtering, partial updates and the error envelope.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use common::{test_api, TestApi};

async fn create_banner(api: &TestApi, body: Value) -> Value {
    let response = api.server.post("/api/banners").json(&body).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

#[tokio::test]
async fn create_derives_a_clean_slug_from_a_vietnamese_name() {
    let api = test_api();

    let body = create_banner(
        &api,
        json!({ "name": "Sầu Riêng Đặc Biệt", "image": "x.png", "page": "home" }),
    )
    .await;

    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Banner created successfully");
    assert_eq!(body["data"]["slug"], "sau-rieng-dac-biet");

    let slug = body["data"]["slug"].as_str().unwrap();
    assert!(slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
}

#[tokio::test]
async fn colliding_names_get_numeric_suffixes() {
    let api = test_api();

    for expected in ["xoai-cat-hoa-loc", "xoai-cat-hoa-loc-1", "xoai-cat-hoa-loc-2"] {
        let body = create_banner(
            &api,
            json!({ "name": "Xoài Cát Hòa Lộc", "image": "x.png", "page": "products" }),
        )
        .await;
        assert_eq!(body["data"]["slug"], expected);
    }
}

#[tokio::test]
async fn empty_list_is_still_a_success() {
    let api = test_api();

    let response = api.server.get("/api/banners").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 0);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn list_filters_by_page_and_active_and_sorts_by_order() {
    let api = test_api();

    create_banner(
        &api,
        json!({ "name": "Second", "image": "b.png", "page": "home", "order": 2 }),
    )
    .await;
    create_banner(
        &api,
        json!({ "name": "First", "image": "a.png", "page": "home", "order": 1 }),
    )
    .await;
    create_banner(
        &api,
        json!({ "name": "Hidden", "image": "c.png", "page": "about", "order": 5, "isActive": false }),
    )
    .await;

    let body = api
        .server
        .get("/api/banners")
        .add_query_param("page", "home")
        .await
        .json::<Value>();
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["name"], "First");
    assert_eq!(body["data"][1]["name"], "Second");

    let body = api
        .server
        .get("/api/banners")
        .add_query_param("isActive", "false")
        .await
        .json::<Value>();
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "Hidden");

    // empty filter values mean "no filter"
    let body = api
        .server
        .get("/api/banners")
        .add_query_param("isActive", "")
        .add_query_param("page", "")
        .await
        .json::<Value>();
    assert_eq!(body["count"], 3);
}

#[tokio::test]
async fn garbage_filter_values_are_rejected() {
    let api = test_api();

    let response = api
        .server
        .get("/api/banners")
        .add_query_param("isActive", "maybe")
        .await;
    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid value 'maybe' for 'isActive'");

    let response = api
        .server
        .get("/api/banners")
        .add_query_param("page", "shop")
        .await;
    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["message"],
        "Invalid value 'shop' for 'page'"
    );
}

#[tokio::test]
async fn page_lookup_returns_the_first_active_banner() {
    let api = test_api();

    create_banner(
        &api,
        json!({ "name": "Runner Up", "image": "b.png", "page": "home", "order": 2 }),
    )
    .await;
    create_banner(
        &api,
        json!({ "name": "Winner", "image": "a.png", "page": "home", "order": 1 }),
    )
    .await;
    create_banner(
        &api,
        json!({ "name": "Inactive", "image": "c.png", "page": "home", "order": 0, "isActive": false }),
    )
    .await;

    let response = api.server.get("/api/banners/page/home").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["name"], "Winner");

    let response = api.server.get("/api/banners/page/contact").await;
    response.assert_status_not_found();
    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "No active banner for this page");
}

#[tokio::test]
async fn partial_update_only_touches_sent_fields() {
    let api = test_api();

    let created = create_banner(
        &api,
        json!({
            "name": "Trang Chủ",
            "image": "hero.png",
            "page": "home",
            "title": "Chào mừng",
            "order": 3
        }),
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap();

    let response = api
        .server
        .put(&format!("/api/banners/{id}"))
        .json(&json!({ "title": "Updated title" }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["message"], "Banner updated successfully");
    assert_eq!(body["data"]["title"], "Updated title");
    assert_eq!(body["data"]["name"], "Trang Chủ");
    assert_eq!(body["data"]["image"], "hero.png");
    assert_eq!(body["data"]["page"], "home");
    assert_eq!(body["data"]["order"], 3);
    assert_eq!(body["data"]["slug"], "trang-chu");
}

#[tokio::test]
async fn blank_slug_on_update_is_rederived_not_persisted() {
    let api = test_api();

    let created = create_banner(
        &api,
        json!({ "name": "Gạo ST25", "slug": "  CUSTOM-Key ", "image": "x.png", "page": "products" }),
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap();
    // explicit slugs are only trimmed and lowercased
    assert_eq!(created["data"]["slug"], "custom-key");

    let response = api
        .server
        .put(&format!("/api/banners/{id}"))
        .json(&json!({ "slug": "" }))
        .await;
    response.assert_status_ok();

    let slug = response.json::<Value>()["data"]["slug"].clone();
    assert_eq!(slug, "gao-st25", "cleared slug must be rederived from name");
}

#[tokio::test]
async fn explicit_duplicate_slugs_are_rejected() {
    let api = test_api();

    create_banner(
        &api,
        json!({ "name": "One", "slug": "shared", "image": "x.png", "page": "home" }),
    )
    .await;

    let response = api
        .server
        .post("/api/banners")
        .json(&json!({ "name": "Two", "slug": "shared", "image": "y.png", "page": "home" }))
        .await;
    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Slug 'shared' is already in use");

    // same check on update
    let other = create_banner(
        &api,
        json!({ "name": "Three", "image": "z.png", "page": "about" }),
    )
    .await;
    let id = other["data"]["id"].as_str().unwrap();
    let response = api
        .server
        .put(&format!("/api/banners/{id}"))
        .json(&json!({ "slug": "shared" }))
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn unknown_page_value_is_rejected_and_nothing_persists() {
    let api = test_api();

    let response = api
        .server
        .post("/api/banners")
        .json(&json!({ "name": "Bad", "image": "x.png", "page": "shop" }))
        .await;
    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["success"], false);

    let body = api.server.get("/api/banners").await.json::<Value>();
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn unknown_page_value_on_update_changes_nothing() {
    let api = test_api();

    let created = create_banner(
        &api,
        json!({ "name": "Keep", "image": "x.png", "page": "home" }),
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap();

    let response = api
        .server
        .put(&format!("/api/banners/{id}"))
        .json(&json!({ "page": "mars" }))
        .await;
    response.assert_status_bad_request();

    let body = api.server.get(&format!("/api/banners/{id}")).await.json::<Value>();
    assert_eq!(body["data"]["page"], "home");
}

#[tokio::test]
async fn blank_required_fields_get_an_aggregated_message() {
    let api = test_api();

    let response = api
        .server
        .post("/api/banners")
        .json(&json!({ "name": "   ", "image": " ", "page": "home" }))
        .await;
    response.assert_status_bad_request();

    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "image: Image is required; name: Name is required");
}

#[tokio::test]
async fn missing_and_deleted_banners_are_not_found() {
    let api = test_api();

    let ghost = Uuid::new_v4();
    let response = api.server.get(&format!("/api/banners/{ghost}")).await;
    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["message"], "Banner not found");

    let response = api.server.delete(&format!("/api/banners/{ghost}")).await;
    response.assert_status_not_found();

    let created = create_banner(
        &api,
        json!({ "name": "Short Lived", "image": "x.png", "page": "news" }),
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap();

    let response = api.server.delete(&format!("/api/banners/{id}")).await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Banner deleted successfully");

    api.server
        .delete(&format!("/api/banners/{id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn malformed_ids_are_bad_requests() {
    let api = test_api();

    let response = api.server.get("/api/banners/not-a-uuid").await;
    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["success"], false);
}
