use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::item::{Item, ItemChanges, NewItem};

/// Narrow persistence interface the item handlers depend on. Handlers never
/// see SQL; swapping the backing store only requires another implementation
/// of this trait.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn insert(&self, new: NewItem) -> Result<Item, DatabaseError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>, DatabaseError>;
    /// Merge the given changes into an existing record. Returns the updated
    /// record, or `None` if the id no longer resolves.
    async fn update(&self, id: Uuid, changes: ItemChanges) -> Result<Option<Item>, DatabaseError>;
    /// Returns whether a record was actually removed
    async fn delete(&self, id: Uuid) -> Result<bool, DatabaseError>;
    /// The `limit` most recently created items, newest first
    async fn list_recent(&self, limit: i64) -> Result<Vec<Item>, DatabaseError>;
}

pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn insert(&self, new: NewItem) -> Result<Item, DatabaseError> {
        let item = sqlx::query_as::<_, Item>(
            "INSERT INTO items (id, name, description, quantity) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, name, description, quantity, created_at, updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.quantity)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>, DatabaseError> {
        let item = sqlx::query_as::<_, Item>(
            "SELECT id, name, description, quantity, created_at, updated_at \
             FROM items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn update(&self, id: Uuid, changes: ItemChanges) -> Result<Option<Item>, DatabaseError> {
        // COALESCE keeps the stored value wherever no change was provided
        let item = sqlx::query_as::<_, Item>(
            "UPDATE items SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                quantity = COALESCE($4, quantity), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING id, name, description, quantity, created_at, updated_at",
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(changes.quantity)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Item>, DatabaseError> {
        let items = sqlx::query_as::<_, Item>(
            "SELECT id, name, description, quantity, created_at, updated_at \
             FROM items ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }
}
