use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use std::sync::Arc;
use taskmaster_server::task::TaskState;
use taskmaster_server::web;
use tower::ServiceExt;
use uuid::Uuid;

mod common;

use common::setup;

fn test_app(db: DatabaseConnection) -> Router {
    let task_state = Arc::new(TaskState { db: Arc::new(db) });
    web::api::create_api_router(task_state)
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Drives POST /api/tasks and returns the created task body.
async fn create_task(app: &Router, title: &str, description: Option<&str>) -> Value {
    let body = match description {
        Some(description) => json!({ "title": title, "description": description }),
        None => json!({ "title": title }),
    };
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/tasks", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    response_json(response).await
}

#[tokio::test]
async fn can_list_tasks_when_none_exist() {
    let ctx = setup().await.expect("Failed to setup test context");
    let app = test_app(ctx.db);

    let response = app
        .oneshot(empty_request(Method::GET, "/api/tasks"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn can_create_task_with_completed_false_and_nonempty_id() {
    let ctx = setup().await.expect("Failed to setup test context");
    let app = test_app(ctx.db);

    let created = create_task(&app, "Buy milk", None).await;

    assert_eq!(created["title"], "Buy milk");
    assert_eq!(created["completed"], json!(false));
    assert_eq!(created["description"], Value::Null);
    let id = created["id"].as_str().expect("id should be a string");
    assert!(!id.is_empty());
    assert!(created["created_at"].as_str().is_some());
}

#[tokio::test]
async fn can_see_created_task_in_listing() {
    let ctx = setup().await.expect("Failed to setup test context");
    let app = test_app(ctx.db);

    let created = create_task(&app, "Water plants", Some("Balcony only")).await;

    let response = app
        .oneshot(empty_request(Method::GET, "/api/tasks"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;

    let tasks = body.as_array().expect("listing should be an array");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], created["id"]);
    assert_eq!(tasks[0]["description"], "Balcony only");
}

#[tokio::test]
async fn can_flip_only_completed_field_with_patch() {
    let ctx = setup().await.expect("Failed to setup test context");
    let app = test_app(ctx.db);

    let created = create_task(&app, "Call the dentist", Some("Before Friday")).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            &format!("/api/tasks/{}", id),
            json!({ "completed": true }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated = response_json(response).await;
    assert_eq!(updated["completed"], json!(true));
    assert_eq!(updated["title"], "Call the dentist");
    assert_eq!(updated["description"], "Before Friday");
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[tokio::test]
async fn can_update_title_with_patch() {
    let ctx = setup().await.expect("Failed to setup test context");
    let app = test_app(ctx.db);

    let created = create_task(&app, "Old title", None).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            &format!("/api/tasks/{}", id),
            json!({ "title": "New title" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated = response_json(response).await;
    assert_eq!(updated["title"], "New title");
    assert_eq!(updated["completed"], json!(false));
}

#[tokio::test]
async fn can_clear_description_with_patch() {
    let ctx = setup().await.expect("Failed to setup test context");
    let app = test_app(ctx.db);

    let created = create_task(&app, "Pack for the trip", Some("Passport, charger")).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            &format!("/api/tasks/{}", id),
            json!({ "description": "" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated = response_json(response).await;
    assert_eq!(updated["description"], "");
    assert_eq!(updated["title"], "Pack for the trip");
}

#[tokio::test]
async fn cannot_patch_missing_task() {
    let ctx = setup().await.expect("Failed to setup test context");
    let app = test_app(ctx.db);

    let response = app
        .oneshot(json_request(
            Method::PATCH,
            &format!("/api/tasks/{}", Uuid::new_v4()),
            json!({ "completed": true }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn can_delete_task_and_drop_it_from_listing() {
    let ctx = setup().await.expect("Failed to setup test context");
    let app = test_app(ctx.db);

    let created = create_task(&app, "Ephemeral", None).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(empty_request(
            Method::DELETE,
            &format!("/api/tasks/{}", id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("deleted"));

    let response = app
        .oneshot(empty_request(Method::GET, "/api/tasks"))
        .await
        .unwrap();
    let listing = response_json(response).await;
    assert_eq!(listing, json!([]));
}

#[tokio::test]
async fn delete_of_missing_task_leaves_server_serving() {
    let ctx = setup().await.expect("Failed to setup test context");
    let app = test_app(ctx.db);

    let response = app
        .clone()
        .oneshot(empty_request(
            Method::DELETE,
            &format!("/api/tasks/{}", Uuid::new_v4()),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The router keeps answering after the failed delete.
    let response = app
        .oneshot(empty_request(Method::GET, "/api/tasks"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
