use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

use super::utils::{item_not_found, parse_item_id};

/// DELETE /items/:id - Remove an item permanently. No soft delete, and items
/// have no dependents, so there is nothing to cascade.
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_item_id(&id)?;

    if !state.items.delete(id).await? {
        return Err(item_not_found());
    }

    Ok(Json(json!({ "message": "Item deleted successfully" })))
}
