//! Application state wiring.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use crate::mail::{MailQueue, PostgresMailQueue};
use crate::storage::{ObjectStorage, SupabaseConfig, SupabaseStorage};

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn ObjectStorage + Send + Sync>,
    pub mail_queue: Arc<dyn MailQueue + Send + Sync>,
}

impl AppState {
    /// Wire the production backends: Supabase template storage and a
    /// Postgres mail queue.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let supabase_config = SupabaseConfig::from_env()?;
        let storage = SupabaseStorage::new(supabase_config)?;

        let database_url = env::var("SUPABASE_DATABASE_URL")
            .map_err(|_| "SUPABASE_DATABASE_URL must be set")?;
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(20)
            .min_connections(2)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(900))
            .connect(&database_url)
            .await?;

        let mail_queue = PostgresMailQueue::new(pool);
        mail_queue.ensure_schema().await?;

        Ok(Self::with_backends(
            Arc::new(storage),
            Arc::new(mail_queue),
        ))
    }

    /// Build state from arbitrary backend implementations.
    pub fn with_backends(
        storage: Arc<dyn ObjectStorage + Send + Sync>,
        mail_queue: Arc<dyn MailQueue + Send + Sync>,
    ) -> Self {
        Self {
            storage,
            mail_queue,
        }
    }
}
