//! Message request/response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use spamlens::{NormalizedMessage, StoredMessage};

/// Submit message request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateMessageRequest {
    /// Text to classify; required and non-empty
    #[serde(default)]
    #[schema(example = "Win a free prize now!")]
    pub text: Option<String>,
}

/// A classified message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: Uuid,
    pub text: String,
    /// Text as normalized by the classifier
    pub clean: String,
    /// -1 unknown, 0 ham, 1 spam
    pub label: i32,
    /// Spam probability in [0, 1]
    pub prob: f64,
    pub anomaly: bool,
    pub created_at: DateTime<Utc>,
}

impl From<NormalizedMessage> for MessageResponse {
    fn from(msg: NormalizedMessage) -> Self {
        Self {
            id: msg.id,
            text: msg.text,
            clean: msg.clean,
            label: msg.label,
            prob: msg.prob,
            anomaly: msg.anomaly,
            created_at: msg.created_at,
        }
    }
}

impl From<StoredMessage> for MessageResponse {
    fn from(msg: StoredMessage) -> Self {
        msg.normalize(Utc::now()).into()
    }
}
