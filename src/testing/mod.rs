//! In-memory store implementations. They back the integration tests so the
//! full router can be exercised without a database; ordering and merge
//! semantics match the Postgres stores.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::database::items::ItemStore;
use crate::database::manager::DatabaseError;
use crate::database::models::item::{Item, ItemChanges, NewItem};
use crate::database::models::session::Session;
use crate::database::models::user::{NewUser, User};
use crate::database::sessions::SessionStore;
use crate::database::users::UserStore;
use crate::state::AppState;

/// AppState wired to fresh in-memory stores
pub fn memory_state() -> AppState {
    AppState {
        users: Arc::new(MemoryUserStore::default()),
        sessions: Arc::new(MemorySessionStore::default()),
        items: Arc::new(MemoryItemStore::default()),
        db: None,
    }
}

#[derive(Default)]
pub struct MemoryItemStore {
    // Insertion order is creation order; list_recent walks it backwards
    items: Mutex<Vec<Item>>,
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn insert(&self, new: NewItem) -> Result<Item, DatabaseError> {
        let now = Utc::now();
        let item = Item {
            id: Uuid::new_v4(),
            name: new.name,
            description: new.description,
            quantity: new.quantity,
            created_at: now,
            updated_at: now,
        };
        self.items.lock().expect("lock poisoned").push(item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>, DatabaseError> {
        let items = self.items.lock().expect("lock poisoned");
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn update(&self, id: Uuid, changes: ItemChanges) -> Result<Option<Item>, DatabaseError> {
        let mut items = self.items.lock().expect("lock poisoned");
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };

        if let Some(name) = changes.name {
            item.name = name;
        }
        if let Some(description) = changes.description {
            item.description = Some(description);
        }
        if let Some(quantity) = changes.quantity {
            item.quantity = quantity;
        }
        item.updated_at = Utc::now();

        Ok(Some(item.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let mut items = self.items.lock().expect("lock poisoned");
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(items.len() < before)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Item>, DatabaseError> {
        let items = self.items.lock().expect("lock poisoned");
        Ok(items.iter().rev().take(limit as usize).cloned().collect())
    }
}

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, new: NewUser) -> Result<User, DatabaseError> {
        let user = User {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            created_at: Utc::now(),
        };
        self.users.lock().expect("lock poisoned").push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let users = self.users.lock().expect("lock poisoned");
        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DatabaseError> {
        let users = self.users.lock().expect("lock poisoned");
        Ok(users.iter().find(|user| user.id == id).cloned())
    }
}

#[derive(Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn insert(
        &self,
        user_id: Uuid,
        token_fingerprint: &str,
    ) -> Result<Session, DatabaseError> {
        let session = Session {
            id: Uuid::new_v4(),
            user_id,
            token_fingerprint: token_fingerprint.to_string(),
            created_at: Utc::now(),
        };
        self.sessions
            .lock()
            .expect("lock poisoned")
            .insert(token_fingerprint.to_string(), session.clone());
        Ok(session)
    }

    async fn exists(&self, token_fingerprint: &str) -> Result<bool, DatabaseError> {
        let sessions = self.sessions.lock().expect("lock poisoned");
        Ok(sessions.contains_key(token_fingerprint))
    }

    async fn delete(&self, token_fingerprint: &str) -> Result<bool, DatabaseError> {
        let mut sessions = self.sessions.lock().expect("lock poisoned");
        Ok(sessions.remove(token_fingerprint).is_some())
    }
}
