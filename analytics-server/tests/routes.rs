//! Router tests: drive the full app in-process against a temp SQLite file.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use analytics_server::db::{create_pool, init_schema};
use analytics_server::{build_router, AppState, ServerConfig};

struct TestApp {
    router: Router,
    _dir: TempDir,
}

async fn test_app() -> TestApp {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());
    let db = create_pool(&url).await.expect("pool creation failed");
    init_schema(&db).await.expect("schema creation failed");

    TestApp {
        router: build_router(AppState { db }, &ServerConfig::default()),
        _dir: dir,
    }
}

async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, value)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

#[tokio::test]
async fn root_returns_welcome_message() {
    let app = test_app().await;
    let (status, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Bienvenue — Random Number App API"}));
}

#[tokio::test]
async fn health_returns_ok() {
    let app = test_app().await;
    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn create_then_list_contains_new_item() {
    let app = test_app().await;

    let (_, before) = send(&app, get("/items/")).await;
    assert_eq!(before, json!([]));

    let (status, created) = send(&app, post_json("/items/", r#"{"name":"widget"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "widget");
    let id = created["id"].as_i64().expect("id assigned");

    let (status, after) = send(&app, get("/items/")).await;
    assert_eq!(status, StatusCode::OK);
    let after = after.as_array().unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0], json!({"id": id, "name": "widget"}));
}

#[tokio::test]
async fn ids_are_fresh_for_each_insert() {
    let app = test_app().await;

    let (_, a) = send(&app, post_json("/items/", r#"{"name":"a"}"#)).await;
    let (_, b) = send(&app, post_json("/items/", r#"{"name":"b"}"#)).await;
    let (_, c) = send(&app, post_json("/items/", r#"{"name":"a"}"#)).await;

    let ids = [a["id"].as_i64(), b["id"].as_i64(), c["id"].as_i64()];
    assert!(ids.iter().all(Option::is_some));
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
    assert_ne!(ids[0], ids[2]);
}

#[tokio::test]
async fn client_supplied_id_is_ignored() {
    let app = test_app().await;

    let (_, first) = send(&app, post_json("/items/", r#"{"name":"first"}"#)).await;
    let (status, second) = send(
        &app,
        post_json("/items/", &format!(r#"{{"id":{},"name":"second"}}"#, first["id"])),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_ne!(second["id"], first["id"]);
}

#[tokio::test]
async fn list_is_stable_without_writes() {
    let app = test_app().await;
    for name in ["x", "y"] {
        send(&app, post_json("/items/", &format!(r#"{{"name":"{name}"}}"#))).await;
    }

    let (_, first) = send(&app, get("/items/")).await;
    let (_, second) = send(&app, get("/items/")).await;
    assert_eq!(first, second);
    assert_eq!(first.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn routes_accept_missing_trailing_slash() {
    let app = test_app().await;

    let (status, _) = send(&app, post_json("/items", r#"{"name":"no-slash"}"#)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, items) = send(&app, get("/items")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(items.as_array().unwrap().len(), 1);

    let (status, events) = send(&app, get("/api/events")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(events, json!({"result": [1, 2, 3]}));
}

#[tokio::test]
async fn missing_name_is_validation_error() {
    let app = test_app().await;
    let (status, body) = send(&app, post_json("/items/", r#"{"id":5}"#)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");

    let (_, items) = send(&app, get("/items/")).await;
    assert_eq!(items, json!([]));
}

#[tokio::test]
async fn wrong_name_type_is_validation_error() {
    let app = test_app().await;
    let (status, body) = send(&app, post_json("/items/", r#"{"name":123}"#)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn array_body_is_validation_error() {
    let app = test_app().await;
    let (status, body) = send(&app, post_json("/items/", r#"[null,"from-array"]"#)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");

    let (_, items) = send(&app, get("/items/")).await;
    assert_eq!(items, json!([]));
}

#[tokio::test]
async fn scalar_body_is_validation_error() {
    let app = test_app().await;
    let (status, _) = send(&app, post_json("/items/", r#""widget""#)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_body_is_validation_error() {
    let app = test_app().await;
    let (status, body) = send(&app, post_json("/items/", "{not json")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn missing_content_type_is_validation_error() {
    let app = test_app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/items/")
        .body(Body::from(r#"{"name":"x"}"#))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["message"].as_str().unwrap().contains("Content-Type"));
}

#[tokio::test]
async fn events_list_is_fixed() {
    let app = test_app().await;
    send(&app, post_json("/items/", r#"{"name":"unrelated"}"#)).await;

    let (status, body) = send(&app, get("/api/events/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": [1, 2, 3]}));
}

#[tokio::test]
async fn event_lookup_echoes_id() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api/events/42")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 42}));

    let (status, body) = send(&app, get("/api/events/-1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": -1}));
}

#[tokio::test]
async fn non_integer_event_id_is_validation_error() {
    let app = test_app().await;
    let (status, body) = send(&app, get("/api/events/abc")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "event_id must be an integer, got 'abc'");
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let app = test_app().await;
    let (status, body) = send(&app, get("/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}
