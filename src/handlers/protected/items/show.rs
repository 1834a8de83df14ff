use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};

use crate::api::format::item_to_api_value;
use crate::error::ApiError;
use crate::state::AppState;

use super::utils::{item_not_found, parse_item_id};

/// GET /items/:id - Fetch a single item, `404` if the id does not resolve
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_item_id(&id)?;

    let item = state
        .items
        .find_by_id(id)
        .await?
        .ok_or_else(item_not_found)?;

    Ok(Json(json!({ "data": item_to_api_value(&item) })))
}
