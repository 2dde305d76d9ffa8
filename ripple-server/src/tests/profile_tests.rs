use axum::http::{StatusCode, header};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use ripple_core::{PhotoKind, classify, image::encode_selected, profile::ProfileStore, SelectedFile};

use super::test_utils::{FakeUploads, TestApp, body_json, get, get_as, post_json_as};

fn submit_body(photo: &str, path: &str) -> serde_json::Value {
    json!({
        "name": "Alice",
        "username": "alice1",
        "bio": "hello world",
        "profile_photo": photo,
        "path": path,
    })
}

#[tokio::test]
async fn profile_requires_session() {
    let app = TestApp::new(FakeUploads::default());

    let response = app.router().oneshot(get("/api/v1/profile")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn missing_profile_is_404() {
    let app = TestApp::new(FakeUploads::default());

    let response = app
        .router()
        .oneshot(get_as("/api/v1/profile", Uuid::new_v4()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_fields_get_a_full_error_map() {
    let app = TestApp::new(FakeUploads::default());
    let body = json!({
        "name": "Al",
        "username": "x",
        "bio": "",
        "profile_photo": "",
        "path": "/profile/new",
    });

    let response = app
        .router()
        .oneshot(post_json_as("/api/v1/profile", Uuid::new_v4(), &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    let fields = &body["error"]["fields"]["errors"];
    assert!(fields["name"].as_str().unwrap().contains("at least 3"));
    assert!(fields["username"].is_string());
    assert!(fields["bio"].is_string());
    assert!(fields["profile_photo"].is_string());
    assert_eq!(app.uploads.call_count(), 0);
}

#[tokio::test]
async fn remote_photo_persists_unchanged_and_skips_upload() {
    let app = TestApp::new(FakeUploads::returning("https://cdn/should-not-happen"));
    let user_id = Uuid::new_v4();

    let response = app
        .router()
        .oneshot(post_json_as(
            "/api/v1/profile",
            user_id,
            &submit_body("https://img/x.png", "/profile/new"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    assert_eq!(app.uploads.call_count(), 0);

    let profile = app
        .profiles
        .get_profile(user_id)
        .await
        .unwrap()
        .expect("profile stored");
    assert_eq!(profile.image, "https://img/x.png");
    assert_eq!(profile.username, "alice1");
}

#[tokio::test]
async fn local_photo_is_uploaded_before_persisting() {
    let app = TestApp::new(FakeUploads::returning("https://cdn/a.png"));
    let user_id = Uuid::new_v4();

    let encoded = encode_selected(&SelectedFile {
        name: "avatar.jpg".to_string(),
        content_type: "image/jpeg".to_string(),
        bytes: vec![0xff, 0xd8, 0xff, 0xe0],
    })
    .expect("jpeg encodes");

    let response = app
        .router()
        .oneshot(post_json_as(
            "/api/v1/profile",
            user_id,
            &submit_body(&encoded, "/profile/new"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(app.uploads.call_count(), 1);

    let profile = app
        .profiles
        .get_profile(user_id)
        .await
        .unwrap()
        .expect("profile stored");
    assert_eq!(profile.image, "https://cdn/a.png");
    assert_eq!(classify(&profile.image), PhotoKind::Remote);
}

#[tokio::test]
async fn edit_page_submit_returns_to_referring_page() {
    let app = TestApp::new(FakeUploads::default());
    let user_id = Uuid::new_v4();

    let mut request = post_json_as(
        "/api/v1/profile",
        user_id,
        &submit_body("https://img/x.png", "/profile/edit"),
    );
    request
        .headers_mut()
        .insert(header::REFERER, "/profile/alice1".parse().unwrap());

    let response = app.router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/profile/alice1"
    );
}

#[tokio::test]
async fn upload_failure_is_a_retryable_gateway_error() {
    let app = TestApp::new(FakeUploads::failing("service unavailable"));
    let user_id = Uuid::new_v4();

    let encoded = encode_selected(&SelectedFile {
        name: "avatar.png".to_string(),
        content_type: "image/png".to_string(),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    })
    .expect("png encodes");

    let response = app
        .router()
        .oneshot(post_json_as(
            "/api/v1/profile",
            user_id,
            &submit_body(&encoded, "/profile/new"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    // Nothing was persisted with the stale Local value.
    assert!(app.profiles.get_profile(user_id).await.unwrap().is_none());
}
