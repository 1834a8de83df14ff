use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::api::format::item_to_api_value;
use crate::error::ApiError;
use crate::state::AppState;

use super::validate::validate_create;

/// POST /items - Create an item
///
/// Expected Input:
/// ```json
/// {
///   "name": "string",          // Required, <= 255 chars
///   "description": "string",   // Optional, nullable
///   "quantity": 0              // Required integer, >= 0
/// }
/// ```
///
/// Responses:
/// - `201` `{ "message": "Item created successfully", "data": {...} }`
/// - `422` `{ "message": "Please check your request", "errors": {...} }`
pub async fn store(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let new_item = validate_create(&payload)
        .map_err(|errors| ApiError::unprocessable_entity("Please check your request", errors))?;

    let item = state.items.insert(new_item).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Item created successfully",
            "data": item_to_api_value(&item),
        })),
    ))
}
