// Public authentication handlers - token acquisition endpoints

pub mod login;    // POST /login - authenticate and get a bearer token
pub mod register; // POST /register - create account and get a bearer token
pub mod utils;
pub mod validate;

pub use login::login;
pub use register::register;
