// Protected handlers - bearer authentication required. The auth middleware
// runs before any of these, so every handler can rely on an AuthUser
// extension being present.
pub mod auth;
pub mod items;
