//! Products, news and quote-request endpoints, plus the image upload flow.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use common::{multipart_image, test_api, TestApi};

async fn create(api: &TestApi, path: &str, body: Value) -> Value {
    let response = api.server.post(path).json(&body).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

// --- Products ---

#[tokio::test]
async fn products_are_reachable_by_derived_slug() {
    let api = test_api();

    let created = create(
        &api,
        "/api/products",
        json!({ "name": "Thanh Long Ruột Đỏ", "type": "fresh", "image": "tl.png" }),
    )
    .await;
    assert_eq!(created["data"]["slug"], "thanh-long-ruot-do");

    let response = api.server.get("/api/products/slug/thanh-long-ruot-do").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["name"], "Thanh Long Ruột Đỏ");

    let response = api.server.get("/api/products/slug/khong-ton-tai").await;
    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["message"], "Product not found");
}

#[tokio::test]
async fn products_filter_by_type() {
    let api = test_api();

    create(
        &api,
        "/api/products",
        json!({ "name": "Xoài Tươi", "type": "fresh", "image": "a.png" }),
    )
    .await;
    create(
        &api,
        "/api/products",
        json!({ "name": "Sầu Riêng Đông Lạnh", "type": "frozen", "image": "b.png" }),
    )
    .await;
    create(
        &api,
        "/api/products",
        json!({ "name": "Mít Sấy", "type": "dried", "image": "c.png" }),
    )
    .await;

    let body = api
        .server
        .get("/api/products")
        .add_query_param("type", "frozen")
        .await
        .json::<Value>();
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "Sầu Riêng Đông Lạnh");

    api.server
        .get("/api/products")
        .add_query_param("type", "smoked")
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn product_update_switches_type_and_keeps_the_rest() {
    let api = test_api();

    let created = create(
        &api,
        "/api/products",
        json!({
            "name": "Chuối Già Nam Mỹ", "type": "fresh", "image": "ch.png",
            "description": "Xuất khẩu loại 1", "order": 4
        }),
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap();

    let response = api
        .server
        .put(&format!("/api/products/{id}"))
        .json(&json!({ "type": "frozen" }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["data"]["type"], "frozen");
    assert_eq!(body["data"]["name"], "Chuối Già Nam Mỹ");
    assert_eq!(body["data"]["description"], "Xuất khẩu loại 1");
    assert_eq!(body["data"]["order"], 4);
}

// --- News ---

#[tokio::test]
async fn articles_default_to_published_with_a_timestamp() {
    let api = test_api();

    let body = create(
        &api,
        "/api/news",
        json!({ "title": "Mùa Vải Thiều 2026", "content": "..." }),
    )
    .await;
    assert_eq!(body["data"]["isPublished"], true);
    assert!(body["data"]["publishedAt"].is_string());
    assert_eq!(body["data"]["slug"], "mua-vai-thieu-2026");
}

#[tokio::test]
async fn drafts_get_stamped_once_on_first_publish() {
    let api = test_api();

    let created = create(
        &api,
        "/api/news",
        json!({ "title": "Bản Nháp", "content": "...", "isPublished": false }),
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap();
    assert_eq!(created["data"]["publishedAt"], Value::Null);

    let published = api
        .server
        .put(&format!("/api/news/{id}"))
        .json(&json!({ "isPublished": true }))
        .await
        .json::<Value>();
    let stamp = published["data"]["publishedAt"].clone();
    assert!(stamp.is_string());

    // unpublish and republish; the original stamp survives
    api.server
        .put(&format!("/api/news/{id}"))
        .json(&json!({ "isPublished": false }))
        .await
        .assert_status_ok();
    let republished = api
        .server
        .put(&format!("/api/news/{id}"))
        .json(&json!({ "isPublished": true }))
        .await
        .json::<Value>();
    assert_eq!(republished["data"]["publishedAt"], stamp);
}

#[tokio::test]
async fn news_list_filters_drafts_and_orders_newest_first() {
    let api = test_api();

    create(&api, "/api/news", json!({ "title": "Older", "content": "1" })).await;
    create(&api, "/api/news", json!({ "title": "Newer", "content": "2" })).await;
    create(
        &api,
        "/api/news",
        json!({ "title": "Draft", "content": "3", "isPublished": false }),
    )
    .await;

    let body = api
        .server
        .get("/api/news")
        .add_query_param("isPublished", "true")
        .await
        .json::<Value>();
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["title"], "Newer");
    assert_eq!(body["data"][1]["title"], "Older");

    let body = api.server.get("/api/news").await.json::<Value>();
    assert_eq!(body["count"], 3);

    let response = api.server.get("/api/news/slug/older").await;
    response.assert_status_ok();

    let ghost = Uuid::new_v4();
    let response = api.server.get(&format!("/api/news/{ghost}")).await;
    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["message"], "Article not found");
}

// --- Quote requests ---

#[tokio::test]
async fn quote_form_submission_normalizes_blank_optionals() {
    let api = test_api();

    let response = api
        .server
        .post("/api/quotes")
        .json(&json!({
            "name": "Nguyễn Văn A",
            "phone": "0913224378",
            "email": "",
            "company": "  ",
            "product": "Sầu riêng",
            "quantity": "",
            "message": ""
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["message"], "Quote request submitted successfully");
    assert_eq!(body["data"]["status"], "new");
    assert_eq!(body["data"]["email"], Value::Null);
    assert_eq!(body["data"]["company"], Value::Null);
    assert_eq!(body["data"]["product"], "Sầu riêng");
}

#[tokio::test]
async fn quotes_move_through_their_statuses() {
    let api = test_api();

    let created = create(
        &api,
        "/api/quotes",
        json!({ "name": "Trần B", "phone": "0909000000" }),
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap();

    let response = api
        .server
        .put(&format!("/api/quotes/{id}"))
        .json(&json!({ "status": "contacted" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["status"], "contacted");

    // only declared statuses are accepted
    api.server
        .put(&format!("/api/quotes/{id}"))
        .json(&json!({ "status": "archived" }))
        .await
        .assert_status_bad_request();

    let body = api
        .server
        .get("/api/quotes")
        .add_query_param("status", "contacted")
        .await
        .json::<Value>();
    assert_eq!(body["count"], 1);

    let body = api
        .server
        .get("/api/quotes")
        .add_query_param("status", "closed")
        .await
        .json::<Value>();
    assert_eq!(body["count"], 0);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn quote_delete_and_not_found_messages() {
    let api = test_api();

    let ghost = Uuid::new_v4();
    let response = api.server.get(&format!("/api/quotes/{ghost}")).await;
    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["message"], "Quote request not found");

    let created = create(
        &api,
        "/api/quotes",
        json!({ "name": "Lê C", "phone": "0911222333" }),
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap();

    let response = api.server.delete(&format!("/api/quotes/{id}")).await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["message"],
        "Quote request deleted successfully"
    );
}

// --- Uploads ---

#[tokio::test]
async fn uploaded_images_are_stored_and_served_back() {
    let api = test_api();

    let payload: &[u8] = b"fake image bytes";
    let (content_type, body) = multipart_image("image", "photo.jpg", payload);

    let response = api
        .server
        .post("/api/upload")
        .content_type(&content_type)
        .bytes(body.into())
        .await;
    response.assert_status(StatusCode::CREATED);

    let envelope = response.json::<Value>();
    assert_eq!(envelope["message"], "File uploaded successfully");
    let url = envelope["data"]["url"].as_str().unwrap().to_string();
    assert!(url.starts_with("/uploads/image-"));
    assert!(url.ends_with(".jpg"));

    // the stored file is served back under /uploads
    let served = api.server.get(&url).await;
    served.assert_status_ok();
    assert_eq!(served.as_bytes().as_ref(), payload);
}

#[tokio::test]
async fn non_image_uploads_are_rejected() {
    let api = test_api();

    let (content_type, body) = multipart_image("image", "malware.exe", b"nope");
    let response = api
        .server
        .post("/api/upload")
        .content_type(&content_type)
        .bytes(body.into())
        .await;
    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["message"],
        "Only image files are allowed (jpg, jpeg, png, gif, webp, svg)"
    );
}

#[tokio::test]
async fn uploads_without_an_image_field_are_rejected() {
    let api = test_api();

    let (content_type, body) = multipart_image("document", "photo.jpg", b"data");
    let response = api
        .server
        .post("/api/upload")
        .content_type(&content_type)
        .bytes(body.into())
        .await;
    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["message"], "No image field in request");
}
