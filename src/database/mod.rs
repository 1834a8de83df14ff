pub mod items;
pub mod manager;
pub mod models;
pub mod sessions;
pub mod users;
