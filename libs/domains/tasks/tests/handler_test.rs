//! Handler tests for the Tasks domain
//!
//! Exercise the HTTP contract of the task routes only (status codes, bodies,
//! headers) against the in-memory store. Both stores share the behaviour
//! checked in `integration_test.rs`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use domain_tasks::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let service = TaskService::new(InMemoryTaskRepository::new());
    Router::new().nest(TASKS_PATH, handlers::router(service))
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, body: Value) -> Task {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/tasks", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

async fn error_message(response: axum::response::Response) -> String {
    let body: Value = json_body(response.into_body()).await;
    body["error"].as_str().unwrap_or_default().to_string()
}

#[tokio::test]
async fn test_create_returns_201_with_location() {
    let app = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/tasks",
            json!({ "title": "  Ship it  ", "dueDate": "2025-12-31" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "/api/tasks/1");

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "Ship it");
    assert_eq!(body["status"], "TODO");
    assert_eq!(body["dueDate"], "2025-12-31");
    assert!(body["description"].is_null());
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_validation_errors_are_400() {
    let app = app();

    let cases = [
        json!({ "title": "" }),
        json!({ "title": "   " }),
        json!({}),
        json!({ "title": "x".repeat(101) }),
        json!({ "title": "ok", "description": "d".repeat(501) }),
    ];

    for body in cases {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/tasks", body.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
        assert!(!error_message(response).await.is_empty());
    }
}

#[tokio::test]
async fn test_create_boundary_title_is_accepted() {
    let app = app();
    let task = create(&app, json!({ "title": "x".repeat(100) })).await;
    assert_eq!(task.title.chars().count(), 100);
}

#[tokio::test]
async fn test_malformed_json_and_unknown_status_are_400() {
    let app = app();

    let malformed = Request::builder()
        .method("POST")
        .uri("/api/tasks")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();
    let response = app.clone().oneshot(malformed).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/tasks",
            json!({ "title": "x", "status": "ARCHIVED" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/tasks",
            json!({ "title": "x", "dueDate": "tomorrow" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_content_type_is_415() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/tasks")
                .body(Body::from(json!({ "title": "x" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_invalid_id_is_400_on_every_route() {
    let app = app();

    for method in ["GET", "DELETE"] {
        let response = app
            .clone()
            .oneshot(empty_request(method, "/api/tasks/abc"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", method);
        assert_eq!(error_message(response).await, "Invalid task id: abc");
    }

    for method in ["PUT", "PATCH"] {
        let response = app
            .clone()
            .oneshot(json_request(method, "/api/tasks/abc", json!({ "title": "x" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", method);
    }
}

#[tokio::test]
async fn test_missing_task_is_404() {
    let app = app();

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/tasks/999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(response).await, "Task 999 not found");

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/tasks/999", json!({ "title": "x" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(empty_request("DELETE", "/api/tasks/999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_put_replaces_and_clears_omitted_fields() {
    let app = app();
    let task = create(
        &app,
        json!({ "title": "a", "description": "keep", "status": "IN_PROGRESS", "dueDate": "2025-01-02" }),
    )
    .await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/tasks/{}", task.id),
            json!({ "title": "b" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let replaced: Task = json_body(response.into_body()).await;
    assert_eq!(replaced.id, task.id);
    assert_eq!(replaced.title, "b");
    assert_eq!(replaced.description, None);
    assert_eq!(replaced.status, TaskStatus::Todo);
    assert_eq!(replaced.due_date, None);
    assert_eq!(replaced.created_at, task.created_at);
}

#[tokio::test]
async fn test_patch_changes_only_present_fields() {
    let app = app();
    let task = create(
        &app,
        json!({ "title": "a", "description": "keep", "dueDate": "2025-01-02" }),
    )
    .await;
    let uri = format!("/api/tasks/{}", task.id);

    let response = app
        .clone()
        .oneshot(json_request("PATCH", &uri, json!({ "status": "DONE" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let patched: Task = json_body(response.into_body()).await;
    assert_eq!(patched.status, TaskStatus::Done);
    assert_eq!(patched.description.as_deref(), Some("keep"));
    assert_eq!(patched.due_date, task.due_date);

    let response = app
        .oneshot(json_request("PATCH", &uri, json!({ "dueDate": null })))
        .await
        .unwrap();
    let cleared: Task = json_body(response.into_body()).await;
    assert_eq!(cleared.due_date, None);
    assert_eq!(cleared.status, TaskStatus::Done);
}

#[tokio::test]
async fn test_patch_blank_title_is_400() {
    let app = app();
    let task = create(&app, json!({ "title": "a" })).await;

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/api/tasks/{}", task.id),
            json!({ "title": "  " }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_put_invalid_body_is_400_and_keeps_task() {
    let app = app();
    let task = create(&app, json!({ "title": "keep", "description": "d" })).await;
    let uri = format!("/api/tasks/{}", task.id);

    let bodies = [
        json!({ "title": "" }),
        json!({ "title": "   " }),
        json!({ "title": "x".repeat(101) }),
        json!({ "title": "ok", "status": "NOPE" }),
        json!({ "title": "ok", "dueDate": "31/12/2025" }),
    ];
    for body in bodies {
        let response = app
            .clone()
            .oneshot(json_request("PUT", &uri, body.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", body);
    }

    let response = app.oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let current: Task = json_body(response.into_body()).await;
    assert_eq!(current, task);
}

#[tokio::test]
async fn test_list_returns_creation_order() {
    let app = app();
    for title in ["A", "B", "C"] {
        create(&app, json!({ "title": title })).await;
    }

    let response = app
        .oneshot(empty_request("GET", "/api/tasks"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let tasks: Vec<Task> = json_body(response.into_body()).await;
    let titles: Vec<_> = tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["A", "B", "C"]);
}

#[tokio::test]
async fn test_end_to_end_lifecycle() {
    let app = app();

    let task = create(&app, json!({ "title": "Buy milk" })).await;
    assert_eq!(task.status, TaskStatus::Todo);
    let uri = format!("/api/tasks/{}", task.id);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &uri,
            json!({ "title": "Buy milk", "status": "DONE" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let done: Task = json_body(response.into_body()).await;
    assert_eq!(done.status, TaskStatus::Done);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.into_body().collect().await.unwrap().to_bytes().is_empty());

    let response = app.oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
