//! Filesystem store writing each appeal to `<data_dir>/appeal_<id>.json`
//!
//! Files are pretty-printed UTF-8 JSON. A record is first written to a hidden
//! temporary file in the same directory and then renamed into place, so a
//! reader never observes a half-written appeal.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use super::{AppealStore, StorageError};
use crate::features::appeals::models::StoredAppeal;

pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `data_dir`, creating the directory if needed
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Final location of the appeal with the given id
    pub fn path_for(&self, id: Uuid) -> PathBuf {
        self.data_dir.join(format!("appeal_{}.json", id))
    }

    fn temp_path_for(&self, id: Uuid) -> PathBuf {
        self.data_dir.join(format!(".appeal_{}.json.tmp", id))
    }
}

#[async_trait]
impl AppealStore for JsonFileStore {
    async fn save(&self, appeal: &StoredAppeal) -> Result<(), StorageError> {
        let body = serde_json::to_vec_pretty(appeal)?;
        let temp_path = self.temp_path_for(appeal.id);
        let path = self.path_for(appeal.id);

        tokio::fs::write(&temp_path, &body).await?;
        if let Err(e) = tokio::fs::rename(&temp_path, &path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        debug!("Appeal written: id={}, path={}", appeal.id, path.display());
        Ok(())
    }
}
