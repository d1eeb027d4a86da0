// ============================================================================
// Tenant Core - Tenant Console
// File: crates/tenant-core/src/services/console.rs
// Description: Store plus content generation behind one entry point
// ============================================================================

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{info, instrument};

use crate::activity::{ActivityEntry, ActivityKind, ActivityLog};
use crate::domain::TenantRecord;
use crate::error::{ConsoleError, DomainError};
use crate::generation::{ContentGenerator, GenerationError};
use crate::repositories::TenantRepository;

use super::tenant_store::TenantStore;

/// Snapshot of what the console can currently do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleHealth {
    pub credential_provisioned: bool,
    pub tenant_count: usize,
    pub capacity: usize,
    pub remaining_slots: usize,
    pub can_create: bool,
}

pub struct TenantConsole<R: TenantRepository, G: ContentGenerator> {
    store: TenantStore<R>,
    generator: Arc<G>,
    activity: Arc<ActivityLog>,
    generation_timeout: Duration,
}

impl<R: TenantRepository, G: ContentGenerator> TenantConsole<R, G> {
    pub async fn boot(
        repository: Arc<R>,
        generator: Arc<G>,
        activity: Arc<ActivityLog>,
        generation_timeout: Duration,
    ) -> Self {
        activity.info(ActivityKind::SystemBoot, "Booting tenant console");
        activity.info(ActivityKind::SystemBoot, "Loading tenant store");

        let store = TenantStore::open(repository, activity.clone()).await;
        info!(
            tenants = store.len(),
            credential = generator.is_authorized(),
            "Tenant console ready"
        );

        Self {
            store,
            generator,
            activity,
            generation_timeout,
        }
    }

    pub fn health(&self) -> ConsoleHealth {
        ConsoleHealth {
            credential_provisioned: self.generator.is_authorized(),
            tenant_count: self.store.len(),
            capacity: self.store.capacity(),
            remaining_slots: self.store.remaining_slots(),
            can_create: self.store.can_create(),
        }
    }

    pub fn store(&self) -> &TenantStore<R> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TenantStore<R> {
        &mut self.store
    }

    pub fn activity(&self) -> &Arc<ActivityLog> {
        &self.activity
    }

    /// Generate landing page copy for `tenant` and return the merged copy.
    ///
    /// The store is not touched; commit the result with `TenantStore::update`.
    #[instrument(skip(self, tenant), fields(tenant_id = %tenant.id))]
    pub async fn draft_content(&self, tenant: &TenantRecord) -> Result<TenantRecord, ConsoleError> {
        if !tenant.has_generation_input() {
            return Err(ConsoleError::MissingGenerationInput);
        }

        let call = self.generator.generate(&tenant.description, &tenant.name);
        let outcome = match tokio::time::timeout(self.generation_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(GenerationError::Handshake),
        };

        match outcome {
            Ok(generated) => {
                self.activity.record(
                    ActivityEntry::builder(ActivityKind::GenerationSucceeded)
                        .tenant(tenant.id.as_str())
                        .message(format!("Content generated for {}", tenant.name))
                        .build(),
                );
                Ok(generated.apply_to(tenant))
            }
            Err(e) => {
                self.activity.record(
                    ActivityEntry::builder(ActivityKind::GenerationFailed)
                        .error()
                        .tenant(tenant.id.as_str())
                        .message(e.to_string())
                        .build(),
                );
                Err(e.into())
            }
        }
    }

    /// Draft content for a stored tenant and commit it.
    pub async fn generate_for(&mut self, id: &str) -> Result<TenantRecord, ConsoleError> {
        let tenant = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::TenantNotFound(id.to_string()))?;

        let drafted = self.draft_content(&tenant).await?;
        Ok(self.store.update(drafted).await?)
    }
}
