use axum::{extract::State, response::Json, Extension};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// POST /logout - Invalidate the presented token
///
/// Deletes the session row for this exact token; other tokens issued to the
/// same user stay valid. The middleware already rejected absent or revoked
/// tokens, so reaching this handler means there is a session to revoke.
pub async fn logout(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Value>, ApiError> {
    state.sessions.delete(&auth.token_fingerprint).await?;
    tracing::info!(user_id = %auth.user_id, "session revoked");

    Ok(Json(json!({ "message": "Logged out successfully" })))
}
