mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

use common::{json_request, register_user, send, test_app};

#[tokio::test]
async fn register_returns_token_and_user() -> Result<()> {
    let app = test_app();

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/register",
            None,
            Some(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "password": "long-enough-secret",
            })),
        ),
    )
    .await?;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User registered successfully");
    assert!(body["data"]["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["data"]["user"]["email"], "ada@example.com");
    assert!(body["data"]["user"]["password_hash"].is_null());
    Ok(())
}

#[tokio::test]
async fn register_reports_all_field_violations() -> Result<()> {
    let app = test_app();

    let (status, body) = send(
        &app,
        json_request("POST", "/register", None, Some(json!({"password": "short"}))),
    )
    .await?;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["name"][0], "The name field is required.");
    assert_eq!(body["errors"]["email"][0], "The email field is required.");
    assert_eq!(
        body["errors"]["password"][0],
        "The password field must be at least 8 characters."
    );
    Ok(())
}

#[tokio::test]
async fn register_rejects_duplicate_email() -> Result<()> {
    let app = test_app();
    register_user(&app, "ada@example.com").await?;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/register",
            None,
            Some(json!({
                "name": "Someone Else",
                "email": "ada@example.com",
                "password": "another-long-secret",
            })),
        ),
    )
    .await?;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["email"][0], "The email has already been taken.");
    Ok(())
}

#[tokio::test]
async fn login_returns_token_for_valid_credentials() -> Result<()> {
    let app = test_app();
    register_user(&app, "ada@example.com").await?;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/login",
            None,
            Some(json!({
                "email": "ada@example.com",
                "password": "correct-horse-battery",
            })),
        ),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert!(body["data"]["token"].as_str().is_some_and(|t| !t.is_empty()));
    Ok(())
}

#[tokio::test]
async fn login_rejects_bad_credentials_identically() -> Result<()> {
    let app = test_app();
    register_user(&app, "ada@example.com").await?;

    // Wrong password for a known account
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/login",
            None,
            Some(json!({"email": "ada@example.com", "password": "wrong-password"})),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");

    // Unknown account gets the same answer
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/login",
            None,
            Some(json!({"email": "nobody@example.com", "password": "wrong-password"})),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");
    Ok(())
}

#[tokio::test]
async fn login_validates_missing_fields() -> Result<()> {
    let app = test_app();

    let (status, body) = send(&app, json_request("POST", "/login", None, Some(json!({})))).await?;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["email"][0], "The email field is required.");
    assert_eq!(body["errors"]["password"][0], "The password field is required.");
    Ok(())
}

#[tokio::test]
async fn user_endpoint_returns_current_identity() -> Result<()> {
    let app = test_app();
    let token = register_user(&app, "ada@example.com").await?;

    let (status, body) = send(&app, json_request("GET", "/user", Some(&token), None)).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "ada@example.com");
    assert!(body["data"]["password_hash"].is_null());
    Ok(())
}

#[tokio::test]
async fn logout_revokes_only_the_presented_token() -> Result<()> {
    let app = test_app();
    let first = register_user(&app, "ada@example.com").await?;

    // A second session for the same account
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/login",
            None,
            Some(json!({"email": "ada@example.com", "password": "correct-horse-battery"})),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    let second = body["data"]["token"].as_str().expect("token").to_string();

    let (status, body) = send(&app, json_request("POST", "/logout", Some(&first), None)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Logged out successfully");

    // The revoked token no longer works, not even for logout
    let (status, _) = send(&app, json_request("GET", "/user", Some(&first), None)).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = send(&app, json_request("POST", "/logout", Some(&first), None)).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // The other session is untouched
    let (status, _) = send(&app, json_request("GET", "/user", Some(&second), None)).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn protected_endpoints_reject_missing_or_garbage_tokens() -> Result<()> {
    let app = test_app();

    // No Authorization header at all
    let (status, _) = send(&app, json_request("GET", "/items", None, None)).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // A perfectly valid payload does not matter without a token
    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/items",
            None,
            Some(json!({"name": "Bolt", "quantity": 5})),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Garbage bearer token
    let (status, _) = send(
        &app,
        json_request("GET", "/items", Some("not-a-real-token"), None),
    )
    .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Wrong scheme
    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/items")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .body(axum::body::Body::empty())?;
    let (status, _) = send(&app, request).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}
