use async_trait::async_trait;

use crate::error::StorageError;

/// Named slots holding opaque bytes.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Bytes stored under `key`, or `None` when the slot has never been written.
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the slot. On error the previous contents are left intact.
    async fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;
}

/// Keys become file names, so path separators and traversal are refused.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let invalid = key.is_empty()
        || key.contains(['/', '\\'])
        || key.starts_with('.')
        || key.chars().any(char::is_control);
    if invalid {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}
