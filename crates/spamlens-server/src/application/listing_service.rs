//! Listing Application Service (Use Case)

use chrono::Utc;
use std::sync::Arc;

use spamlens::{DomainError, MessageRepository, NormalizedMessage};

/// Application service for reading stored messages
pub struct ListingService<R: MessageRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: MessageRepository + ?Sized> ListingService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// All messages newest first, with defaults filled in for legacy records
    pub async fn list_recent(&self) -> Result<Vec<NormalizedMessage>, DomainError> {
        let messages = self.repo.list_recent().await?;
        let now = Utc::now();

        Ok(messages.iter().map(|m| m.normalize(now)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryMessageRepository;
    use crate::testing::UnavailableRepository;
    use chrono::TimeZone;
    use spamlens::{NewMessage, Prediction, StoredMessage};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_lists_newest_first() {
        let repo = Arc::new(InMemoryMessageRepository::new());
        let service = ListingService::new(repo.clone());

        for (text, label) in [("see you tomorrow", 0), ("claim your prize", 1)] {
            let prediction = Prediction::from_raw(text.into(), label, 0.5, false).unwrap();
            repo.insert(&NewMessage::new(text, prediction).unwrap())
                .await
                .unwrap();
        }

        let listed = service.list_recent().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].text, "claim your prize");
        assert_eq!(listed[1].text, "see you tomorrow");
        assert!(listed[0].created_at >= listed[1].created_at);
    }

    #[tokio::test]
    async fn test_normalizes_legacy_records_without_touching_store() {
        let at = Utc.with_ymd_and_hms(2023, 6, 1, 8, 30, 0).unwrap();
        let legacy = StoredMessage {
            id: Uuid::new_v4(),
            text: "old message".into(),
            clean: None,
            label: Some(-1),
            prob: None,
            anomaly: None,
            created_at: Some(at),
        };
        let repo = Arc::new(InMemoryMessageRepository::with_messages(vec![
            legacy.clone(),
        ]));
        let service = ListingService::new(repo.clone());

        let listed = service.list_recent().await.unwrap();

        assert_eq!(listed[0].clean, "");
        assert_eq!(listed[0].label, -1);
        assert_eq!(listed[0].prob, 0.0);
        assert!(!listed[0].anomaly);
        assert_eq!(listed[0].created_at, at);
        assert_eq!(repo.snapshot().await, vec![legacy]);
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let service = ListingService::new(Arc::new(UnavailableRepository));
        assert!(matches!(
            service.list_recent().await,
            Err(DomainError::Storage(_))
        ));
    }
}
