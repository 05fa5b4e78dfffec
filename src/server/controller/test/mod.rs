use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::{
    model::feedback::FeedbackDto,
    server::{config::CorsOrigins, router, state::AppState},
};


/// Response pieces captured from a single request.
struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl TestResponse {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// Builds the full application over an in-memory store with the feedback table.
async fn test_app() -> (Router, DatabaseConnection) {
    let db = TestBuilder::new()
        .with_feedback_table()
        .build()
        .await
        .unwrap()
        .into_database()
        .await
        .unwrap();

    let app = router::app(AppState::new(db.clone()), &CorsOrigins::Any);

    (app, db)
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

async fn send_empty(app: &Router, method: Method, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

async fn send_json(app: &Router, method: Method, uri: &str, body: &Value) -> TestResponse {
    send_raw(app, method, uri, body.to_string()).await
}

async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: impl Into<String>,
) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();

    send(app, request).await
}

async fn feedback_count(db: &DatabaseConnection) -> u64 {
    entity::prelude::Feedback::find().count(db).await.unwrap()
}
