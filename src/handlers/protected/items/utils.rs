use uuid::Uuid;

use crate::error::ApiError;

pub(super) fn item_not_found() -> ApiError {
    ApiError::not_found("Item not found")
}

/// An identifier that does not parse as a UUID cannot name a stored item,
/// so it reports not-found rather than a validation error.
pub(super) fn parse_item_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| item_not_found())
}
