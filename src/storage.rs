//! Object storage access for ticket templates.
//!
//! Templates live in a Supabase storage bucket and are fetched read-only by
//! convention-based path. The `ObjectStorage` trait keeps the rest of the
//! application independent of the concrete backend, which also lets tests
//! substitute an in-memory store.

use async_trait::async_trait;
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Errors raised by template storage access.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),
    #[error("object {0} not found in bucket")]
    NotFound(String),
    #[error("storage request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("storage returned status {status} for {path}")]
    UnexpectedStatus {
        path: String,
        status: reqwest::StatusCode,
    },
}

/// Read-only binary object fetch.
#[async_trait]
pub trait ObjectStorage {
    /// Download the full contents of the object at `path`.
    async fn download_file(&self, path: &str) -> Result<Vec<u8>, StorageError>;
}

/// Supabase storage connection settings, loaded from the environment.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub api_key: String,
    pub bucket: String,
}

impl SupabaseConfig {
    pub fn from_env() -> Result<Self, StorageError> {
        let url = env::var("SUPABASE_URL").map_err(|_| StorageError::MissingEnv("SUPABASE_URL"))?;
        let api_key = env::var("SUPABASE_ANON_KEY")
            .map_err(|_| StorageError::MissingEnv("SUPABASE_ANON_KEY"))?;
        let bucket = env::var("BUCKET_NAME").map_err(|_| StorageError::MissingEnv("BUCKET_NAME"))?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            api_key,
            bucket,
        })
    }
}

/// Supabase-backed implementation of `ObjectStorage`.
pub struct SupabaseStorage {
    client: reqwest::Client,
    config: SupabaseConfig,
}

impl SupabaseStorage {
    pub fn new(config: SupabaseConfig) -> Result<Self, StorageError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client, config })
    }

    fn object_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.config.url, self.config.bucket, path
        )
    }
}

#[async_trait]
impl ObjectStorage for SupabaseStorage {
    async fn download_file(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        let response = self
            .client
            .get(self.object_url(path))
            .bearer_auth(&self.config.api_key)
            .header("apikey", &self.config.api_key)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StorageError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            return Err(StorageError::UnexpectedStatus {
                path: path.to_string(),
                status,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
