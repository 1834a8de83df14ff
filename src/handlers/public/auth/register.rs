// handlers/public/auth/register.rs - POST /register handler

use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::api::format::user_to_api_value;
use crate::database::models::user::NewUser;
use crate::error::ApiError;
use crate::state::AppState;

use super::utils::{hash_password, issue_token};
use super::validate::validate_register;

/// POST /register - Create a new account and receive a bearer token
///
/// Expected Input:
/// ```json
/// {
///   "name": "string",      // Required, <= 255 chars
///   "email": "string",     // Required, valid address, unique
///   "password": "string"   // Required, >= 8 chars
/// }
/// ```
///
/// Responses:
/// - `201` `{ "message": ..., "data": { "token": ..., "user": {...} } }`
/// - `422` `{ "message": ..., "errors": { field: [violations] } }`
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (data, mut errors) = validate_register(&payload);

    // Uniqueness is reported alongside the other field errors, not after them
    if let Some(email) = data.email.as_deref() {
        if state.users.find_by_email(email).await?.is_some() {
            errors
                .entry("email".to_string())
                .or_default()
                .push("The email has already been taken.".to_string());
        }
    }

    if !errors.is_empty() {
        return Err(ApiError::unprocessable_entity("Please check your request", errors));
    }

    // All three are Some once the error map is empty
    let (Some(name), Some(email), Some(password)) = (data.name, data.email, data.password) else {
        return Err(ApiError::internal_server_error(
            "An error occurred while processing your request",
        ));
    };

    let user = state
        .users
        .insert(NewUser {
            name,
            email,
            password_hash: hash_password(&password)?,
        })
        .await?;

    let token = issue_token(&state, &user).await?;
    tracing::info!(user_id = %user.id, "registered new account");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User registered successfully",
            "data": {
                "token": token,
                "user": user_to_api_value(&user),
            }
        })),
    ))
}
