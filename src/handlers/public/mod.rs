// Public handlers - no authentication required. These are the only routes
// reachable without a bearer token, and exist solely to hand tokens out.
pub mod auth;
