//! Message Entity
//!
//! A submitted text together with its classification. Messages are written
//! once and never updated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{errors::DomainError, Prediction};

/// A classified message that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    text: String,
    prediction: Prediction,
}

impl NewMessage {
    /// Pair a submitted text with its prediction. The text is kept verbatim.
    pub fn new(text: impl Into<String>, prediction: Prediction) -> Result<Self, DomainError> {
        let text = text.into();
        if text.is_empty() {
            return Err(DomainError::validation("Text is required"));
        }
        Ok(Self { text, prediction })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn prediction(&self) -> &Prediction {
        &self.prediction
    }
}

/// A message exactly as the store holds it
///
/// Optional fields may be missing on records written by an older schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredMessage {
    pub id: Uuid,
    pub text: String,
    pub clean: Option<String>,
    pub label: Option<i32>,
    pub prob: Option<f64>,
    pub anomaly: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

impl StoredMessage {
    /// Materialize a freshly inserted record
    pub fn from_new(id: Uuid, created_at: DateTime<Utc>, message: &NewMessage) -> Self {
        let prediction = message.prediction();
        Self {
            id,
            text: message.text().to_string(),
            clean: Some(prediction.clean.clone()),
            label: Some(prediction.label.code()),
            prob: Some(prediction.prob),
            anomaly: Some(prediction.anomaly),
            created_at: Some(created_at),
        }
    }

    /// Fill in defaults for any missing field. `now` stands in for a missing timestamp.
    pub fn normalize(&self, now: DateTime<Utc>) -> NormalizedMessage {
        NormalizedMessage {
            id: self.id,
            text: self.text.clone(),
            clean: self.clean.clone().unwrap_or_default(),
            label: self.label.unwrap_or(0),
            prob: self.prob.unwrap_or(0.0),
            anomaly: self.anomaly.unwrap_or(false),
            created_at: self.created_at.unwrap_or(now),
        }
    }
}

/// Listing shape with every field present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedMessage {
    pub id: Uuid,
    pub text: String,
    pub clean: String,
    pub label: i32,
    pub prob: f64,
    pub anomaly: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn spam_prediction() -> Prediction {
        Prediction::from_raw("win free prize".into(), 1, 0.93, false).unwrap()
    }

    #[test]
    fn test_new_message_rejects_empty_text() {
        let err = NewMessage::new("", spam_prediction()).unwrap_err();
        assert!(err.is_user_error());
    }

    #[test]
    fn test_new_message_keeps_text_verbatim() {
        let msg = NewMessage::new("  Win a free prize now!  ", spam_prediction()).unwrap();
        assert_eq!(msg.text(), "  Win a free prize now!  ");
    }

    #[test]
    fn test_from_new_fills_every_field() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let id = Uuid::new_v4();
        let msg = NewMessage::new("Win a free prize now!", spam_prediction()).unwrap();
        let stored = StoredMessage::from_new(id, at, &msg);

        assert_eq!(stored.id, id);
        assert_eq!(stored.clean.as_deref(), Some("win free prize"));
        assert_eq!(stored.label, Some(1));
        assert_eq!(stored.prob, Some(0.93));
        assert_eq!(stored.anomaly, Some(false));
        assert_eq!(stored.created_at, Some(at));
    }

    #[test]
    fn test_normalize_applies_defaults_without_mutation() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let legacy = StoredMessage {
            id: Uuid::new_v4(),
            text: "hello".into(),
            clean: None,
            label: None,
            prob: None,
            anomaly: None,
            created_at: None,
        };
        let before = legacy.clone();

        let normalized = legacy.normalize(now);

        assert_eq!(normalized.clean, "");
        assert_eq!(normalized.label, 0);
        assert_eq!(normalized.prob, 0.0);
        assert!(!normalized.anomaly);
        assert_eq!(normalized.created_at, now);
        assert_eq!(legacy, before);
    }

    #[test]
    fn test_serializes_camel_case() {
        let msg = NewMessage::new("hi", spam_prediction()).unwrap();
        let stored = StoredMessage::from_new(Uuid::new_v4(), Utc::now(), &msg);
        let json = serde_json::to_value(&stored).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
