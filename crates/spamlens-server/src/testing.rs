//! Test doubles shared by unit tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use spamlens::{
    ClassificationFailure, Classifier, DomainError, MessageRepository, NewMessage, Prediction,
    StoredMessage,
};

/// Classifier that answers every call with the same outcome
pub struct StubClassifier {
    outcome: Result<Prediction, ClassificationFailure>,
    calls: AtomicUsize,
}

impl StubClassifier {
    pub fn returning(clean: &str, label: i32, prob: f64, anomaly: bool) -> Self {
        Self {
            outcome: Ok(Prediction::from_raw(clean.to_string(), label, prob, anomaly).unwrap()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(failure: ClassificationFailure) -> Self {
        Self {
            outcome: Err(failure),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Classifier for StubClassifier {
    async fn classify(&self, _text: &str) -> Result<Prediction, ClassificationFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }

    async fn health(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Store whose connection is gone
pub struct UnavailableRepository;

#[async_trait]
impl MessageRepository for UnavailableRepository {
    async fn insert(&self, _message: &NewMessage) -> Result<StoredMessage, DomainError> {
        Err(DomainError::storage("connection refused"))
    }

    async fn list_recent(&self) -> Result<Vec<StoredMessage>, DomainError> {
        Err(DomainError::storage("connection refused"))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Err(DomainError::storage("connection refused"))
    }
}
