use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use super::blob_store::{validate_key, BlobStore};
use crate::error::StorageError;

/// In-process blob store. Writes can be made to fail to exercise the
/// persistence failure path.
#[derive(Default)]
pub struct MemoryBlobStore {
    slots: DashMap<String, Vec<u8>>,
    fail_writes: AtomicBool,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Store bytes directly, bypassing failure injection
    pub fn insert_raw(&self, key: &str, bytes: impl Into<Vec<u8>>) {
        self.slots.insert(key.to_string(), bytes.into());
    }

    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.slots.get(key).map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        validate_key(key)?;
        Ok(self.get(key))
    }

    async fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        validate_key(key)?;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::WriteRejected(key.to_string()));
        }
        self.slots.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
