#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Media library API tests.

mod common;

use axum::http::StatusCode;
use common::{TestApp, body_json};
use serde_json::{Value, json};

async fn upload(app: &TestApp, cookies: &str, name: &str, content_type: &str) -> Value {
    let response = app
        .post(
            "/api/media",
            json!({
                "name": name,
                "url": format!("https://cdn.example/{name}"),
                "contentType": content_type,
                "sizeBytes": 122_880,
            }),
            cookies,
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["media"].clone()
}

async fn names(app: &TestApp, cookies: &str, uri: &str) -> Vec<String> {
    let body = body_json(app.get(uri, cookies).await).await;
    body["media"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn media_requires_login() {
    let app = TestApp::new().await;
    let response = app.get("/api/media", "").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn add_describes_item() {
    let app = TestApp::new().await;
    let (owner, cookies) = app.login_as("client").await;

    let image = upload(&app, &cookies, "Company Logo", "image/png").await;
    assert_eq!(image["ownerId"], owner);
    assert_eq!(image["type"], "image");
    assert_eq!(image["size"], "120 KB");
    assert!(image["uploadedAt"].as_str().is_some());

    let file = upload(&app, &cookies, "Price List", "application/pdf").await;
    assert_eq!(file["type"], "file");
    assert!(file["id"].as_i64().unwrap() > image["id"].as_i64().unwrap());
}

#[tokio::test]
async fn add_requires_name_and_url() {
    let app = TestApp::new().await;
    let (_, cookies) = app.login_as("client").await;
    let response = app
        .post("/api/media", json!({ "name": "Logo", "url": " " }), &cookies)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "URL is required");
}

#[tokio::test]
async fn search_filters_by_name() {
    let app = TestApp::new().await;
    let (_, cookies) = app.login_as("client").await;
    for name in ["Beach Sunset", "Company Logo", "Product Photo", "Team Photo"] {
        upload(&app, &cookies, name, "image/jpeg").await;
    }

    assert_eq!(names(&app, &cookies, "/api/media").await.len(), 4);
    assert_eq!(
        names(&app, &cookies, "/api/media?search=photo").await,
        vec!["Product Photo", "Team Photo"]
    );
    assert!(names(&app, &cookies, "/api/media?search=invoice").await.is_empty());
}

#[tokio::test]
async fn libraries_are_private() {
    let app = TestApp::new().await;
    let (_, alice) = app.login_as("client").await;
    let (_, bob) = app.login_as("client").await;
    let item = upload(&app, &alice, "Logo", "image/png").await;

    assert!(names(&app, &bob, "/api/media").await.is_empty());

    let id = item["id"].as_i64().unwrap();
    let response = app.delete(&format!("/api/media/{id}"), &bob).await;
    assert_eq!(body_json(response).await["deleted"], false);
    assert_eq!(names(&app, &alice, "/api/media").await, vec!["Logo"]);
}

#[tokio::test]
async fn delete_removes_item() {
    let app = TestApp::new().await;
    let (_, cookies) = app.login_as("client").await;
    let item = upload(&app, &cookies, "Logo", "image/png").await;
    let id = item["id"].as_i64().unwrap();

    let first = body_json(app.delete(&format!("/api/media/{id}"), &cookies).await).await;
    assert_eq!(first["deleted"], true);
    let again = body_json(app.delete(&format!("/api/media/{id}"), &cookies).await).await;
    assert_eq!(again["deleted"], false);
    assert!(names(&app, &cookies, "/api/media").await.is_empty());
}
