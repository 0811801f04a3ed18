//! In-memory implementation of MessageRepository
//!
//! Backs local demos (`DATABASE_URL=memory://`) and tests. Contents are lost on restart.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use spamlens::{DomainError, MessageRepository, NewMessage, StoredMessage};

/// Process-local message store
#[derive(Default)]
pub struct InMemoryMessageRepository {
    // Insertion order
    messages: RwLock<Vec<StoredMessage>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl InMemoryMessageRepository {
    /// Start from existing records, e.g. rows written by an older schema
    pub fn with_messages(messages: Vec<StoredMessage>) -> Self {
        Self {
            messages: RwLock::new(messages),
        }
    }

    /// Copy of everything stored, in insertion order
    pub async fn snapshot(&self) -> Vec<StoredMessage> {
        self.messages.read().await.clone()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn insert(&self, message: &NewMessage) -> Result<StoredMessage, DomainError> {
        let stored = StoredMessage::from_new(Uuid::new_v4(), Utc::now(), message);
        self.messages.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn list_recent(&self) -> Result<Vec<StoredMessage>, DomainError> {
        let mut messages: Vec<StoredMessage> =
            self.messages.read().await.iter().rev().cloned().collect();
        // Stable sort keeps later inserts first on equal timestamps; missing timestamps sort last.
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.messages.read().await.len() as u64)
    }
}
