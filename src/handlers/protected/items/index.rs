use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::api::format::items_to_api_value;
use crate::error::ApiError;
use crate::state::AppState;

use super::RECENT_ITEMS_LIMIT;

/// GET /items - The 5 most recently created items, newest first.
/// No pagination, no filters; an empty list is a valid answer.
pub async fn index(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let items = state.items.list_recent(RECENT_ITEMS_LIMIT).await?;

    Ok(Json(json!({ "data": items_to_api_value(&items) })))
}
