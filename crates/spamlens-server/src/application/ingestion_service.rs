//! Ingestion Application Service (Use Case)
//!
//! Validate, classify, then store a single submitted message.

use std::sync::Arc;

use spamlens::{Classifier, DomainError, MessageRepository, NewMessage, StoredMessage};

/// Application service for message ingestion
pub struct IngestionService<R: MessageRepository + ?Sized, C: Classifier + ?Sized> {
    repo: Arc<R>,
    classifier: Arc<C>,
}

impl<R: MessageRepository + ?Sized, C: Classifier + ?Sized> IngestionService<R, C> {
    pub fn new(repo: Arc<R>, classifier: Arc<C>) -> Self {
        Self { repo, classifier }
    }

    /// Classify and persist `text`.
    ///
    /// The store is only written after the classifier succeeds, so any
    /// failure leaves it unchanged.
    pub async fn ingest(&self, text: Option<String>) -> Result<StoredMessage, DomainError> {
        let text = match text {
            Some(t) if !t.is_empty() => t,
            _ => return Err(DomainError::validation("Text is required")),
        };

        let prediction = self.classifier.classify(&text).await?;
        let message = NewMessage::new(text, prediction)?;
        let stored = self.repo.insert(&message).await?;

        tracing::info!(
            "Stored message {} (label={}, prob={:.2}, anomaly={})",
            stored.id,
            message.prediction().label,
            message.prediction().prob,
            message.prediction().anomaly
        );

        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryMessageRepository;
    use crate::testing::{StubClassifier, UnavailableRepository};
    use spamlens::ClassificationFailure;

    fn spam_classifier() -> Arc<StubClassifier> {
        Arc::new(StubClassifier::returning("win free prize", 1, 0.93, false))
    }

    #[tokio::test]
    async fn test_ingest_stores_classified_message() {
        let repo = Arc::new(InMemoryMessageRepository::new());
        let service = IngestionService::new(repo.clone(), spam_classifier());

        let stored = service
            .ingest(Some("Win a free prize now!".to_string()))
            .await
            .unwrap();

        assert_eq!(stored.text, "Win a free prize now!");
        assert_eq!(stored.clean.as_deref(), Some("win free prize"));
        assert_eq!(stored.label, Some(1));
        assert_eq!(stored.prob, Some(0.93));
        assert_eq!(stored.anomaly, Some(false));
        assert!(stored.created_at.is_some());
        assert_eq!(repo.snapshot().await, vec![stored]);
    }

    #[tokio::test]
    async fn test_ingest_preserves_text_exactly() {
        let repo = Arc::new(InMemoryMessageRepository::new());
        let service = IngestionService::new(repo, spam_classifier());

        for text in ["  padded  ", "ÜNïcödé ✉", "multi\nline", " "] {
            let stored = service.ingest(Some(text.to_string())).await.unwrap();
            assert_eq!(stored.text, text);
        }
    }

    #[tokio::test]
    async fn test_empty_or_missing_text_is_rejected_without_side_effects() {
        let repo = Arc::new(InMemoryMessageRepository::new());
        let classifier = spam_classifier();
        let service = IngestionService::new(repo.clone(), classifier.clone());

        for input in [None, Some(String::new())] {
            let err = service.ingest(input).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }

        assert_eq!(classifier.calls(), 0);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_classifier_failure_stores_nothing() {
        let repo = Arc::new(InMemoryMessageRepository::new());
        let classifier = Arc::new(StubClassifier::failing(ClassificationFailure::Timeout(
            10_000,
        )));
        let service = IngestionService::new(repo.clone(), classifier);

        let err = service.ingest(Some("hello".to_string())).await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::Upstream(ClassificationFailure::Timeout(10_000))
        ));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let service = IngestionService::new(Arc::new(UnavailableRepository), spam_classifier());

        let err = service.ingest(Some("hello".to_string())).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }
}
