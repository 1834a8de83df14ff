use axum::{extract::State, response::Json, Extension};
use serde_json::{json, Value};

use crate::api::format::user_to_api_value;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /user - Return the identity behind the presented token
pub async fn user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Value>, ApiError> {
    // A token can outlive its account; treat that as an auth failure
    let user = state
        .users
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Unauthenticated"))?;

    Ok(Json(json!({ "data": user_to_api_value(&user) })))
}
