//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use spamlens::{DomainError, MessageRepository, NewMessage, StoredMessage};

/// PostgreSQL implementation of MessageRepository
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const LIST_RECENT_SQL: &str = r#"
    SELECT id, text, clean, label, prob, anomaly, created_at
    FROM messages
    ORDER BY created_at DESC NULLS LAST
"#;

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct MessageRow {
    id: Uuid,
    text: String,
    clean: Option<String>,
    label: Option<i32>,
    prob: Option<f64>,
    anomaly: Option<bool>,
    created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<MessageRow> for StoredMessage {
    fn from(row: MessageRow) -> Self {
        Self {
            id: row.id,
            text: row.text,
            clean: row.clean,
            label: row.label,
            prob: row.prob,
            anomaly: row.anomaly,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    async fn insert(&self, message: &NewMessage) -> Result<StoredMessage, DomainError> {
        let prediction = message.prediction();

        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            INSERT INTO messages (text, clean, label, prob, anomaly)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, text, clean, label, prob, anomaly, created_at
            "#,
        )
        .bind(message.text())
        .bind(&prediction.clean)
        .bind(prediction.label.code())
        .bind(prediction.prob)
        .bind(prediction.anomaly)
        .fetch_one(&self.pool)
        .await
        .map_err(DomainError::storage)?;

        Ok(row.into())
    }

    async fn list_recent(&self) -> Result<Vec<StoredMessage>, DomainError> {
        let rows = sqlx::query_as::<_, MessageRow>(LIST_RECENT_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(DomainError::storage)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.pool)
            .await
            .map_err(DomainError::storage)?;

        Ok(count.max(0) as u64)
    }
}
