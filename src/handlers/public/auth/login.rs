// handlers/public/auth/login.rs - POST /login handler

use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::api::format::user_to_api_value;
use crate::error::ApiError;
use crate::state::AppState;

use super::utils::{issue_token, verify_password};
use super::validate::validate_login;

/// POST /login - Authenticate credentials and receive a bearer token
///
/// Expected Input:
/// ```json
/// {
///   "email": "string",     // Required
///   "password": "string"   // Required
/// }
/// ```
///
/// Responses:
/// - `200` `{ "message": ..., "data": { "token": ..., "user": {...} } }`
/// - `401` `{ "message": "Invalid credentials" }` on any mismatch
/// - `422` `{ "message": ..., "errors": {...} }` when fields are missing
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let (data, errors) = validate_login(&payload);
    if !errors.is_empty() {
        return Err(ApiError::unprocessable_entity("Please check your request", errors));
    }

    let (Some(email), Some(password)) = (data.email, data.password) else {
        return Err(ApiError::internal_server_error(
            "An error occurred while processing your request",
        ));
    };

    // Identical rejection for unknown email and wrong password
    let user = state
        .users
        .find_by_email(&email)
        .await?
        .filter(|user| verify_password(&password, &user.password_hash))
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    let token = issue_token(&state, &user).await?;
    tracing::info!(user_id = %user.id, "login succeeded");

    Ok(Json(json!({
        "message": "Login successful",
        "data": {
            "token": token,
            "user": user_to_api_value(&user),
        }
    })))
}
