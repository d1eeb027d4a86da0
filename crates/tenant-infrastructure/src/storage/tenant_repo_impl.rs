// ============================================================================
// Tenant Infrastructure - Blob-backed Tenant Repository
// File: crates/tenant-infrastructure/src/storage/tenant_repo_impl.rs
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use tenant_core::domain::{seed_collection, TenantRecord};
use tenant_core::error::DomainError;
use tenant_core::repositories::TenantRepository;

use super::blob_store::BlobStore;
use crate::error::StorageError;

/// Stores the whole tenant collection as one JSON array under a single key.
pub struct BlobTenantRepository<B: BlobStore> {
    store: Arc<B>,
    key: String,
}

impl<B: BlobStore> BlobTenantRepository<B> {
    pub fn new(store: Arc<B>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[async_trait]
impl<B: BlobStore> TenantRepository for BlobTenantRepository<B> {
    async fn load(&self) -> Vec<TenantRecord> {
        let bytes = match self.store.read(&self.key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!("No tenant collection stored under {}, using seed", self.key);
                return seed_collection();
            }
            Err(e) => {
                warn!("Failed to read tenant collection {}: {}. Using seed", self.key, e);
                return seed_collection();
            }
        };

        match serde_json::from_slice::<Vec<TenantRecord>>(&bytes) {
            Ok(tenants) => {
                info!("Loaded {} tenants from {}", tenants.len(), self.key);
                tenants
            }
            Err(e) => {
                warn!("Stored tenant collection {} is unreadable: {}. Using seed", self.key, e);
                seed_collection()
            }
        }
    }

    async fn save(&self, tenants: &[TenantRecord]) -> Result<(), DomainError> {
        let payload = serde_json::to_vec(tenants).map_err(StorageError::from)?;
        self.store.write(&self.key, &payload).await?;
        debug!("Saved {} tenants to {}", tenants.len(), self.key);
        Ok(())
    }
}
