//! Core KeyStore implementation

use eyre::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Asynchronous key-value store backed by one file per key.
///
/// Cheap to clone; clones share the same base directory. The store itself
/// enforces no write ordering; callers that need serialized writes go
/// through [`crate::writer`].
#[derive(Debug, Clone)]
pub struct KeyStore {
    base_path: PathBuf,
}

impl KeyStore {
    /// Open a store rooted at the given directory.
    ///
    /// The directory is created lazily on the first write, so opening a
    /// store never touches the filesystem.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let base_path = path.as_ref().to_path_buf();
        debug!(?base_path, "Opened key store");
        Self { base_path }
    }

    /// Path of the file holding a key's payload
    fn key_file(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }

    async fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path)
            .await
            .context("Failed to create store directory")?;
        Ok(())
    }

    /// Read the payload stored under `key`. An absent key is `None`, not an
    /// error.
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_file(key);

        if !path.exists() {
            debug!(%key, "Key not present");
            return Ok(None);
        }

        let payload = fs::read_to_string(&path)
            .await
            .context(format!("Failed to read key file: {}", path.display()))?;
        Ok(Some(payload))
    }

    /// Write `payload` under `key`, creating or overwriting the key file.
    pub async fn set(&self, key: &str, payload: &str) -> Result<()> {
        self.ensure_dir().await?;

        let path = self.key_file(key);
        fs::write(&path, payload)
            .await
            .context(format!("Failed to write key file: {}", path.display()))?;

        debug!(%key, bytes = payload.len(), "Wrote key");
        Ok(())
    }

    /// Remove `key` and its payload. Removing an absent key is a no-op.
    pub async fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_file(key);

        if path.exists() {
            fs::remove_file(&path)
                .await
                .context(format!("Failed to remove key file: {}", path.display()))?;
            debug!(%key, "Removed key");
        }

        Ok(())
    }
}
