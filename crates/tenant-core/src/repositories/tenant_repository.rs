//! Tenant repository trait (port)

use async_trait::async_trait;
use crate::domain::TenantRecord;
use crate::error::DomainError;

/// Durable home of the whole tenant collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Previously saved collection, or the seed collection when nothing usable
    /// is stored. Never fails.
    async fn load(&self) -> Vec<TenantRecord>;

    /// Replace the stored collection. Either the full collection is written or
    /// the previous blob is left untouched.
    async fn save(&self, tenants: &[TenantRecord]) -> Result<(), DomainError>;
}
