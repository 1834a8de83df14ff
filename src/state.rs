use std::sync::Arc;

use sqlx::PgPool;

use crate::database::items::{ItemStore, PgItemStore};
use crate::database::sessions::{PgSessionStore, SessionStore};
use crate::database::users::{PgUserStore, UserStore};

/// Shared handler state. Handlers only see the store traits, so the same
/// router runs against Postgres in production and in-memory stores in tests.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub sessions: Arc<dyn SessionStore>,
    pub items: Arc<dyn ItemStore>,
    /// Present when backed by Postgres; used by the health probe
    pub db: Option<PgPool>,
}

impl AppState {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserStore::new(pool.clone())),
            sessions: Arc::new(PgSessionStore::new(pool.clone())),
            items: Arc::new(PgItemStore::new(pool.clone())),
            db: Some(pool),
        }
    }
}
