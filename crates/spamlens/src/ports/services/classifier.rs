//! Classifier Service Port
//!
//! Abstract interface for the external spam/ham classifier.

use async_trait::async_trait;

use crate::domain::{ClassificationFailure, Prediction};

/// Service interface for classifying a single text
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify non-empty text. Failures are never replaced by a default prediction.
    async fn classify(&self, text: &str) -> Result<Prediction, ClassificationFailure>;

    /// Whether the classifier answers its status route
    async fn health(&self) -> bool;
}
