use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use items_api_rust::app::app;
use items_api_rust::testing::memory_state;

/// Full application router backed by fresh in-memory stores
pub fn test_app() -> Router {
    app(memory_state())
}

/// Drive one request through the router and decode the JSON body
pub async fn send(app: &Router, request: Request<Body>) -> Result<(StatusCode, Value)> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, body))
}

pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };

    builder.body(body).expect("request")
}

/// Register an account and return its bearer token
pub async fn register_user(app: &Router, email: &str) -> Result<String> {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/register",
            None,
            Some(json!({
                "name": "Test User",
                "email": email,
                "password": "correct-horse-battery",
            })),
        ),
    )
    .await?;

    anyhow::ensure!(
        status == StatusCode::CREATED,
        "register failed: {} {}",
        status,
        body
    );

    let token = body["data"]["token"]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("no token in register response: {}", body))?;
    Ok(token.to_string())
}
