//! Object storage for uploaded images.

use std::path::PathBuf;

use async_trait::async_trait;
use hackathons_core::domain::ImageUpload;
use thiserror::Error;
use uuid::Uuid;

pub const UPLOAD_PREFIX: &str = "uploads";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write object {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores the image under a fresh key and returns its public URL.
    async fn put(&self, upload: ImageUpload) -> Result<String, StorageError>;
}

/// Writes objects to a local directory that the server also serves under
/// `/uploads`.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalBlobStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
        }
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn put(&self, upload: ImageUpload) -> Result<String, StorageError> {
        let file_name = format!("{}.{}", Uuid::new_v4(), upload.extension());
        let key = format!("{UPLOAD_PREFIX}/{file_name}");

        let write = async {
            tokio::fs::create_dir_all(&self.root).await?;
            tokio::fs::write(self.root.join(&file_name), &upload.bytes).await
        };
        write.await.map_err(|source| StorageError::Write {
            key: key.clone(),
            source,
        })?;

        Ok(format!(
            "{}/{key}",
            self.public_base_url.trim_end_matches('/')
        ))
    }
}
