// ============================================================================
// Tenant Core - Tenant Store
// File: crates/tenant-core/src/services/tenant_store.rs
// Description: Capacity-limited tenant collection with write-through persistence
// ============================================================================

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tenant_shared::constants::{MAX_TENANTS, TENANT_ID_PREFIX};
use tenant_shared::{new_tenant_id, TenantId};
use tracing::debug;

use crate::activity::{ActivityEntry, ActivityKind, ActivityLog};
use crate::domain::TenantRecord;
use crate::error::DomainError;
use crate::repositories::TenantRepository;

/// Owns the tenant collection and the current selection.
///
/// Every mutation is applied in memory first and then written through the
/// repository before the call returns. A failed write keeps the mutation and
/// leaves the store marked as unflushed until a later write succeeds.
pub struct TenantStore<R: TenantRepository> {
    repository: Arc<R>,
    activity: Arc<ActivityLog>,
    tenants: Vec<TenantRecord>,
    selected: Option<TenantId>,
    issued_ids: HashSet<TenantId>,
    unflushed: bool,
}

impl<R: TenantRepository> TenantStore<R> {
    /// Load the persisted collection. Nothing is selected afterwards.
    ///
    /// Records repeating an earlier id, and records beyond the tenant limit,
    /// are discarded with a WARN entry. The store is then unflushed so the next
    /// write replaces the offending blob.
    pub async fn open(repository: Arc<R>, activity: Arc<ActivityLog>) -> Self {
        let loaded = repository.load().await;
        let loaded_len = loaded.len();

        let mut tenants = Vec::with_capacity(loaded_len.min(MAX_TENANTS));
        let mut issued_ids = HashSet::with_capacity(loaded_len);
        for tenant in loaded {
            if !issued_ids.insert(tenant.id.clone()) {
                activity.record(
                    ActivityEntry::builder(ActivityKind::RecordDiscarded)
                        .warn()
                        .tenant(tenant.id.as_str())
                        .message(format!("Discarded stored record with duplicate id {}", tenant.id))
                        .build(),
                );
                continue;
            }
            if tenants.len() == MAX_TENANTS {
                activity.record(
                    ActivityEntry::builder(ActivityKind::RecordDiscarded)
                        .warn()
                        .tenant(tenant.id.as_str())
                        .message(format!(
                            "Discarded stored record {} beyond the {} tenant limit",
                            tenant.id, MAX_TENANTS
                        ))
                        .build(),
                );
                continue;
            }
            tenants.push(tenant);
        }

        debug!("Tenant store opened with {} tenants", tenants.len());
        let unflushed = tenants.len() != loaded_len;

        Self {
            repository,
            activity,
            tenants,
            selected: None,
            issued_ids,
            unflushed,
        }
    }

    pub fn tenants(&self) -> &[TenantRecord] {
        &self.tenants
    }

    pub fn get(&self, id: &str) -> Option<&TenantRecord> {
        self.tenants.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tenants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }

    pub fn capacity(&self) -> usize {
        MAX_TENANTS
    }

    pub fn remaining_slots(&self) -> usize {
        MAX_TENANTS.saturating_sub(self.tenants.len())
    }

    pub fn can_create(&self) -> bool {
        self.remaining_slots() > 0
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Selected tenant, if the selection still resolves
    pub fn selected(&self) -> Option<&TenantRecord> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    pub fn has_unflushed_changes(&self) -> bool {
        self.unflushed
    }

    /// Provision a tenant with default settings and select it.
    ///
    /// On `Persistence` the tenant still exists in memory and is selected;
    /// retry the write with `flush` rather than calling `create` again.
    pub async fn create(&mut self) -> Result<TenantRecord, DomainError> {
        self.create_at(Utc::now().timestamp_millis()).await
    }

    async fn create_at(&mut self, now_millis: i64) -> Result<TenantRecord, DomainError> {
        if !self.can_create() {
            self.activity.warn(
                ActivityKind::CapacityExceeded,
                format!(
                    "License Limit Reached: User attempted to create tenant #{} of {}.",
                    self.tenants.len() + 1,
                    MAX_TENANTS
                ),
            );
            return Err(DomainError::CapacityExceeded { limit: MAX_TENANTS });
        }

        let id = self.next_id();
        let mut tenant = TenantRecord::provision(id.clone(), self.tenants.len() + 1, now_millis);
        if self.tenants.iter().any(|t| t.subdomain == tenant.subdomain) {
            let suffix = id.trim_start_matches(TENANT_ID_PREFIX).to_lowercase();
            tenant.subdomain = format!("{}-{}", tenant.subdomain, suffix);
        }

        self.issued_ids.insert(id.clone());
        self.tenants.push(tenant.clone());
        self.selected = Some(id.clone());

        self.activity.record(
            ActivityEntry::builder(ActivityKind::TenantCreated)
                .tenant(id.as_str())
                .message(format!("Created new tenant instance: {}", id))
                .build(),
        );

        self.commit().await?;
        Ok(tenant)
    }

    /// Replace the stored tenant carrying `record.id` with `record`.
    pub async fn update(&mut self, mut record: TenantRecord) -> Result<TenantRecord, DomainError> {
        let Some(index) = self.tenants.iter().position(|t| t.id == record.id) else {
            self.activity.record(
                ActivityEntry::builder(ActivityKind::TenantNotFound)
                    .warn()
                    .tenant(record.id.as_str())
                    .message(format!("Update rejected: tenant {} does not exist", record.id))
                    .build(),
            );
            return Err(DomainError::TenantNotFound(record.id));
        };

        let raw = std::mem::take(&mut record.subdomain);
        record.set_subdomain(&raw);

        if let Some(other) = self
            .tenants
            .iter()
            .find(|t| t.id != record.id && t.subdomain == record.subdomain)
        {
            self.activity.record(
                ActivityEntry::builder(ActivityKind::SubdomainConflict)
                    .warn()
                    .tenant(record.id.as_str())
                    .message(format!(
                        "Subdomain '{}' is also used by {}",
                        record.subdomain, other.id
                    ))
                    .build(),
            );
        }

        self.tenants[index] = record.clone();

        self.activity.record(
            ActivityEntry::builder(ActivityKind::TenantUpdated)
                .tenant(record.id.as_str())
                .message(format!("Updated configuration for {}", record.name))
                .build(),
        );

        self.commit().await?;
        Ok(record)
    }

    /// Remove a tenant. `confirmed` must be true; the caller is responsible
    /// for asking.
    pub async fn delete(&mut self, id: &str, confirmed: bool) -> Result<TenantRecord, DomainError> {
        if !confirmed {
            self.activity.record(
                ActivityEntry::builder(ActivityKind::DeletionNotConfirmed)
                    .warn()
                    .tenant(id)
                    .message(format!("Deletion of tenant {} was not confirmed", id))
                    .build(),
            );
            return Err(DomainError::DeletionNotConfirmed(id.to_string()));
        }

        let Some(index) = self.tenants.iter().position(|t| t.id == id) else {
            self.activity.record(
                ActivityEntry::builder(ActivityKind::TenantNotFound)
                    .warn()
                    .tenant(id)
                    .message(format!("Delete rejected: tenant {} does not exist", id))
                    .build(),
            );
            return Err(DomainError::TenantNotFound(id.to_string()));
        };

        let removed = self.tenants.remove(index);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }

        self.activity.record(
            ActivityEntry::builder(ActivityKind::TenantDeleted)
                .warn()
                .tenant(id)
                .message(format!("Tenant {} purged from system storage.", id))
                .build(),
        );

        self.commit().await?;
        Ok(removed)
    }

    /// Change the selection. Not persisted.
    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id.map(str::to_string);
    }

    /// Write the current collection if an earlier write failed.
    pub async fn flush(&mut self) -> Result<(), DomainError> {
        if !self.unflushed {
            return Ok(());
        }
        self.commit().await
    }

    async fn commit(&mut self) -> Result<(), DomainError> {
        match self.repository.save(&self.tenants).await {
            Ok(()) => {
                self.unflushed = false;
                Ok(())
            }
            Err(e) => {
                self.unflushed = true;
                self.activity.error(
                    ActivityKind::PersistenceFailed,
                    format!("Failed to persist tenant collection: {}", e),
                );
                Err(e)
            }
        }
    }

    fn next_id(&self) -> TenantId {
        loop {
            let id = new_tenant_id();
            if !self.issued_ids.contains(&id) {
                return id;
            }
        }
    }
}
