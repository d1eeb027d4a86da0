// ============================================================================
// Tenant Infrastructure - File Blob Store
// File: crates/tenant-infrastructure/src/storage/file_blob_store.rs
// ============================================================================

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use uuid::Uuid;

use super::blob_store::{validate_key, BlobStore};
use crate::error::StorageError;

/// One `<key>.json` file per slot under a root directory.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// reader never observes a partially written slot.
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the root directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let store = Self::new(root);
        tokio::fs::create_dir_all(&store.root).await?;
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

#[async_trait]
impl BlobStore for FileBlobStore {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        validate_key(key)?;

        match tokio::fs::read(self.path_for(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        validate_key(key)?;
        tokio::fs::create_dir_all(&self.root).await?;

        let path = self.path_for(key);
        let temp_path = self
            .root
            .join(format!(".{}.{}.tmp", key, Uuid::new_v4().simple()));

        let mut file = tokio::fs::File::create(&temp_path).await?;
        let written = async {
            file.write_all(bytes).await?;
            file.sync_all().await
        }
        .await;

        if let Err(e) = written {
            drop(file);
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e.into());
        }
        drop(file);

        if let Err(e) = tokio::fs::rename(&temp_path, &path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_slot_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path());
        assert_eq!(store.read("saas_tenants_v2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_replaces_and_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path().join("nested"));

        store.write("slot", b"first").await.unwrap();
        store.write("slot", b"second").await.unwrap();

        assert_eq!(store.read("slot").await.unwrap(), Some(b"second".to_vec()));
        let names: Vec<_> = std::fs::read_dir(store.root())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["slot.json".to_string()]);
    }

    #[tokio::test]
    async fn test_rejects_traversal_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path());
        assert!(matches!(
            store.write("../escape", b"x").await,
            Err(StorageError::InvalidKey(_))
        ));
    }
}
