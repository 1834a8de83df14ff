use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};

use crate::api::format::item_to_api_value;
use crate::error::ApiError;
use crate::state::AppState;

use super::utils::{item_not_found, parse_item_id};
use super::validate::validate_update;

/// PUT/PATCH /items/:id - Merge the provided fields into an existing item
///
/// Responses:
/// - `200` `{ "message": "Item updated successfully", "data": {...} }`
/// - `404` `{ "message": "Item not found" }`
/// - `422` `{ "message": "Please check your request", "errors": {...} }`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_item_id(&id)?;

    // Existence is checked before validation: a malformed payload against a
    // missing record still answers not-found.
    let Some(existing) = state.items.find_by_id(id).await? else {
        return Err(item_not_found());
    };

    let changes = validate_update(&payload)
        .map_err(|errors| ApiError::unprocessable_entity("Please check your request", errors))?;

    let item = if changes.is_empty() {
        existing
    } else {
        state
            .items
            .update(id, changes)
            .await?
            .ok_or_else(item_not_found)?
    };

    Ok(Json(json!({
        "message": "Item updated successfully",
        "data": item_to_api_value(&item),
    })))
}
