use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::session::Session;

/// Session lifecycle: a row is created when a token is issued and deleted on
/// logout. Token validity is one-way per token.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, user_id: Uuid, token_fingerprint: &str)
        -> Result<Session, DatabaseError>;
    async fn exists(&self, token_fingerprint: &str) -> Result<bool, DatabaseError>;
    /// Returns whether a session was actually revoked
    async fn delete(&self, token_fingerprint: &str) -> Result<bool, DatabaseError>;
}

pub struct PgSessionStore {
    pool: PgPool,
}

impl PgSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn insert(
        &self,
        user_id: Uuid,
        token_fingerprint: &str,
    ) -> Result<Session, DatabaseError> {
        let session = sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (id, user_id, token_fingerprint) \
             VALUES ($1, $2, $3) \
             RETURNING id, user_id, token_fingerprint, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(token_fingerprint)
        .fetch_one(&self.pool)
        .await?;

        Ok(session)
    }

    async fn exists(&self, token_fingerprint: &str) -> Result<bool, DatabaseError> {
        let found: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM sessions WHERE token_fingerprint = $1")
                .bind(token_fingerprint)
                .fetch_optional(&self.pool)
                .await?;

        Ok(found.is_some())
    }

    async fn delete(&self, token_fingerprint: &str) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM sessions WHERE token_fingerprint = $1")
            .bind(token_fingerprint)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
