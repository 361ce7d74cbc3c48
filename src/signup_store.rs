use std::path::{Path, PathBuf};

use crate::domain::signup::SignupRecord;

const DATA_FILE_NAME: &str = "signups.json";

/// File-backed signup list: one JSON array in `<data_dir>/signups.json`.
///
/// There is no locking and no atomic replace: two requests interleaving their
/// read and write phases can lose an update.
pub struct SignupStore {
    data_dir: PathBuf,
    data_file: PathBuf,
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Failed to access the signup data file.")]
    IoError(#[from] std::io::Error),
    #[error("The signup data file does not contain valid JSON.")]
    MalformedError(#[from] serde_json::Error),
}

impl SignupStore {
    pub fn new(data_dir: String) -> SignupStore {
        let data_dir = PathBuf::from(data_dir);
        let data_file = data_dir.join(DATA_FILE_NAME);

        SignupStore {
            data_dir,
            data_file,
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Returns every record in insertion order, bootstrapping an empty
    /// collection on first use.
    pub async fn read_all(&self) -> Result<Vec<SignupRecord>, StoreError> {
        self.ensure_data_file().await?;

        let raw = tokio::fs::read_to_string(&self.data_file).await?;
        let records = serde_json::from_str(&raw)?;

        Ok(records)
    }

    /// Replaces the whole persisted collection, serialized with stable
    /// human-readable indentation.
    pub async fn write_all(&self, records: &[SignupRecord]) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.data_dir).await?;

        let serialized = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.data_file, serialized).await?;

        Ok(())
    }

    async fn ensure_data_file(&self) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.data_dir).await?;

        if !self.data_file.exists() {
            tokio::fs::write(&self.data_file, "[]").await?;
        }

        Ok(())
    }
}
