pub mod logout; // POST /logout - revoke the presented token
pub mod user;   // GET /user - current identity

pub use logout::logout;
pub use user::user;
