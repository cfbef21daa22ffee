//! Storage module for accepted appeals
//!
//! Defines the [`AppealStore`] seam and a filesystem implementation that
//! writes one JSON document per appeal.

mod json_file_store;

use async_trait::async_trait;
use thiserror::Error;

use crate::features::appeals::models::StoredAppeal;

pub use json_file_store::JsonFileStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable sink for accepted appeals
///
/// Each call stores one self-contained record. No ordering is guaranteed
/// between concurrent calls.
#[async_trait]
pub trait AppealStore: Send + Sync {
    async fn save(&self, appeal: &StoredAppeal) -> Result<(), StorageError>;
}
