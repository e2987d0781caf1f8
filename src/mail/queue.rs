use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{OutboundMessage, QueueError};

/// Durable append-only mail queue. Success means the record was appended;
/// actual delivery happens out of band.
#[async_trait]
pub trait MailQueue {
    async fn enqueue(&self, message: &OutboundMessage) -> Result<(), QueueError>;
}

/// Postgres-backed mail queue. Each message becomes one row in the `mail`
/// table with the full record stored as JSONB for the delivery worker.
pub struct PostgresMailQueue {
    pool: PgPool,
}

impl PostgresMailQueue {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `mail` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), QueueError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS mail (
                id UUID PRIMARY KEY,
                recipient TEXT NOT NULL,
                payload JSONB NOT NULL,
                queued_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(QueueError::Insert)?;

        Ok(())
    }
}

#[async_trait]
impl MailQueue for PostgresMailQueue {
    async fn enqueue(&self, message: &OutboundMessage) -> Result<(), QueueError> {
        sqlx::query("INSERT INTO mail (id, recipient, payload) VALUES ($1, $2, $3)")
            .bind(Uuid::new_v4())
            .bind(&message.to)
            .bind(sqlx::types::Json(message))
            .execute(&self.pool)
            .await
            .map_err(QueueError::Insert)?;

        log::debug!("Mail record for {} appended to queue", message.to);
        Ok(())
    }
}
