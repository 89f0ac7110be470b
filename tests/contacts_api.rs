//! Contact endpoint behavior: defaults, empty-string resets and filtering.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use common::{test_api, TestApi};

async fn create_contact(api: &TestApi, body: Value) -> Value {
    let response = api.server.post("/api/contacts").json(&body).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

#[tokio::test]
async fn hotline_contact_gets_the_defaults() {
    let api = test_api();

    let body = create_contact(
        &api,
        json!({
            "name": "Hotline",
            "type": "phone",
            "label": "0913224378",
            "value": "0913224378",
            "href": "tel:+84913224378"
        }),
    )
    .await;

    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Contact created successfully");
    assert_eq!(body["data"]["type"], "phone");
    assert_eq!(body["data"]["color"], "bg-blue-500");
    assert_eq!(body["data"]["iconType"], "image");
    assert_eq!(body["data"]["icon"], Value::Null);
    assert_eq!(body["data"]["order"], 0);
    assert_eq!(body["data"]["isActive"], true);
}

#[tokio::test]
async fn list_filters_by_type_and_active() {
    let api = test_api();

    create_contact(
        &api,
        json!({
            "name": "Hotline", "type": "phone", "label": "a", "value": "a",
            "href": "tel:+84", "order": 2
        }),
    )
    .await;
    create_contact(
        &api,
        json!({
            "name": "Zalo OA", "type": "zalo", "label": "b", "value": "b",
            "href": "https://zalo.me/x", "order": 1
        }),
    )
    .await;
    create_contact(
        &api,
        json!({
            "name": "Old Mail", "type": "email", "label": "c", "value": "c",
            "href": "mailto:x", "isActive": false
        }),
    )
    .await;

    let body = api.server.get("/api/contacts").await.json::<Value>();
    assert_eq!(body["count"], 3);

    let body = api
        .server
        .get("/api/contacts")
        .add_query_param("type", "zalo")
        .await
        .json::<Value>();
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "Zalo OA");

    let body = api
        .server
        .get("/api/contacts")
        .add_query_param("isActive", "true")
        .await
        .json::<Value>();
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["name"], "Zalo OA", "sorted by order ascending");

    // the footer shortcut matches ?isActive=true
    let body = api.server.get("/api/contacts/active").await.json::<Value>();
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["name"], "Zalo OA");

    api.server
        .get("/api/contacts")
        .add_query_param("type", "fax")
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn empty_strings_reset_icon_and_color() {
    let api = test_api();

    let created = create_contact(
        &api,
        json!({
            "name": "Messenger", "type": "messenger", "label": "m", "value": "m",
            "href": "https://m.me/x", "icon": "messenger.svg", "iconType": "svg",
            "color": "bg-green-600"
        }),
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap();
    assert_eq!(created["data"]["icon"], "messenger.svg");
    assert_eq!(created["data"]["color"], "bg-green-600");

    let response = api
        .server
        .put(&format!("/api/contacts/{id}"))
        .json(&json!({ "icon": "", "color": "" }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["data"]["icon"], Value::Null);
    assert_eq!(body["data"]["color"], "bg-blue-500");
    // untouched fields survive the reset
    assert_eq!(body["data"]["iconType"], "svg");
    assert_eq!(body["data"]["name"], "Messenger");
}

#[tokio::test]
async fn blank_required_fields_are_rejected() {
    let api = test_api();

    let response = api
        .server
        .post("/api/contacts")
        .json(&json!({
            "name": "X", "type": "phone", "label": "  ", "value": "v", "href": "h"
        }))
        .await;
    response.assert_status_bad_request();

    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "label: Label is required");
}

#[tokio::test]
async fn unknown_contact_type_is_rejected_and_nothing_persists() {
    let api = test_api();

    let response = api
        .server
        .post("/api/contacts")
        .json(&json!({
            "name": "Fax", "type": "fax", "label": "f", "value": "f", "href": "fax:1"
        }))
        .await;
    response.assert_status_bad_request();

    let body = api.server.get("/api/contacts").await.json::<Value>();
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn delete_round_trip_and_not_found() {
    let api = test_api();

    let ghost = Uuid::new_v4();
    let response = api.server.get(&format!("/api/contacts/{ghost}")).await;
    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["message"], "Contact not found");

    let created = create_contact(
        &api,
        json!({
            "name": "Temp", "type": "other", "label": "t", "value": "t", "href": "#"
        }),
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap();

    let response = api.server.delete(&format!("/api/contacts/{id}")).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], "Contact deleted successfully");

    api.server
        .delete(&format!("/api/contacts/{id}"))
        .await
        .assert_status_not_found();
}
