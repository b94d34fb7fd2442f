//! Handler tests for the Users domain
//!
//! These exercise the HTTP surface end to end against the in-memory
//! repository: request deserialization, status codes, and the exact JSON
//! bodies, including the generic error shapes.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_users::{MemoryUserRepository, UserService, handlers};
use email::{MockNotifier, Notifier};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app_with_notifier(notifier: Arc<dyn Notifier>) -> Router {
    let service = UserService::new(MemoryUserRepository::new());
    handlers::router(service, notifier)
}

fn app() -> Router {
    app_with_notifier(Arc::new(MockNotifier::new()))
}

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_user(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_create_user_returns_201_with_record() {
    let app = app();

    let response = app
        .oneshot(post_user(json!({"username": "alice", "email": "a@x.com"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({"id": 1, "username": "alice", "email": "a@x.com"}));
}

#[tokio::test]
async fn test_create_user_rejects_missing_and_empty_fields() {
    for payload in [
        json!({}),
        json!({"username": "alice"}),
        json!({"email": "a@x.com"}),
        json!({"username": "", "email": "a@x.com"}),
        json!({"username": "alice", "email": ""}),
    ] {
        let response = app().oneshot(post_user(payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response.into_body()).await;
        assert_eq!(body, json!({"error": "Invalid user data"}));
    }
}

#[tokio::test]
async fn test_create_user_rejects_taken_email() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_user(json!({"username": "alice", "email": "a@x.com"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(post_user(json!({"username": "bob", "email": "a@x.com"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({"error": "Invalid user data"}));
}

#[tokio::test]
async fn test_list_users_returns_creation_order() {
    let app = app();

    for (username, email) in [("alice", "a@x.com"), ("bob", "b@x.com")] {
        app.clone()
            .oneshot(post_user(json!({"username": username, "email": email})))
            .await
            .unwrap();
    }

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(
        body,
        json!([
            {"id": 1, "username": "alice", "email": "a@x.com"},
            {"id": 2, "username": "bob", "email": "b@x.com"}
        ])
    );
}

#[tokio::test]
async fn test_get_user_not_found() {
    let response = app().oneshot(get("/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({"error": "User not found"}));
}

#[tokio::test]
async fn test_delete_user_returns_204_with_empty_body() {
    let app = app();
    app.clone()
        .oneshot(post_user(json!({"username": "alice", "email": "a@x.com"})))
        .await
        .unwrap();

    let response = app.clone().oneshot(delete("/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let response = app.oneshot(delete("/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({"error": "User not found"}));
}

#[tokio::test]
async fn test_create_sends_welcome_notification() {
    let notifier = Arc::new(MockNotifier::new());
    let app = app_with_notifier(notifier.clone());

    let response = app
        .oneshot(post_user(json!({"username": "alice", "email": "a@x.com"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // The send runs on a spawned task; give it a moment to land.
    for _ in 0..50 {
        if notifier.was_sent_to("a@x.com").await {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("welcome notification was never sent");
}

#[tokio::test]
async fn test_notifier_failure_does_not_undo_creation() {
    let app = app_with_notifier(Arc::new(MockNotifier::failing("smtp unreachable")));

    let response = app
        .clone()
        .oneshot(post_user(json!({"username": "alice", "email": "a@x.com"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get("/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

/// The end-to-end scenario: create, duplicate, fetch, delete, re-create.
#[tokio::test]
async fn test_directory_scenario() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_user(json!({"username": "alice", "email": "a@x.com"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({"id": 1, "username": "alice", "email": "a@x.com"}));

    let response = app
        .clone()
        .oneshot(post_user(json!({"username": "bob", "email": "a@x.com"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.clone().oneshot(get("/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["username"], "alice");

    let response = app.clone().oneshot(delete("/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(get("/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Identifier 1 is retired for good
    let response = app
        .clone()
        .oneshot(post_user(json!({"username": "carol", "email": "c@x.com"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["id"], 2);
}
