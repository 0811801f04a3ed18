//! Message Repository Port
//!
//! Abstract interface for message persistence. Messages are append-only.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, NewMessage, StoredMessage};

/// Repository interface for classified messages
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persist a message, assigning its id and creation time
    async fn insert(&self, message: &NewMessage) -> Result<StoredMessage, DomainError>;

    /// All messages, newest first
    async fn list_recent(&self) -> Result<Vec<StoredMessage>, DomainError>;

    /// Number of stored messages
    async fn count(&self) -> Result<u64, DomainError>;
}
