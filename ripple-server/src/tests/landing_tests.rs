use axum::http::{StatusCode, header};
use tower::ServiceExt;
use uuid::Uuid;

use super::test_utils::{FakeUploads, TestApp, body_json, get, get_as};

#[tokio::test]
async fn unknown_visitor_is_redirected_to_onboarding() {
    let app = TestApp::new(FakeUploads::default());

    let response = app.router().oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/onboarding"
    );
}

#[tokio::test]
async fn known_visitor_sees_home() {
    let app = TestApp::new(FakeUploads::default());
    let user_id = Uuid::new_v4();

    let response = app.router().oneshot(get_as("/", user_id)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["user_id"], user_id.to_string());
}

#[tokio::test]
async fn onboarding_points_at_profile_creation() {
    let app = TestApp::new(FakeUploads::default());

    let response = app.router().oneshot(get("/onboarding")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["next"], "/profile/new");
}
