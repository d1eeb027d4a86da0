//! Wiring from configuration to a running console

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use tenant_core::activity::ActivityLog;
use tenant_core::services::TenantConsole;
use tenant_shared::config::AppConfig;

use crate::generation::GeminiContentGenerator;
use crate::storage::{BlobTenantRepository, FileBlobStore};

pub type ConsoleRuntime = TenantConsole<BlobTenantRepository<FileBlobStore>, GeminiContentGenerator>;

/// Build the file-backed, Gemini-powered console described by `config`.
pub async fn build_console(config: &AppConfig) -> Result<ConsoleRuntime> {
    let activity = Arc::new(ActivityLog::new(config.activity.capacity));

    let blob_store = FileBlobStore::open(&config.storage.data_dir)
        .await
        .with_context(|| format!("Failed to prepare data directory {}", config.storage.data_dir))?;
    let repository = BlobTenantRepository::new(Arc::new(blob_store), config.storage.tenants_key.clone());

    let generator = GeminiContentGenerator::new(&config.generation, config.generation.resolve_api_key());

    info!(
        data_dir = %config.storage.data_dir,
        key = %config.storage.tenants_key,
        model = %config.generation.model,
        "Starting {}",
        config.app.name
    );

    Ok(TenantConsole::boot(
        Arc::new(repository),
        Arc::new(generator),
        activity,
        Duration::from_secs(config.generation.timeout_seconds),
    )
    .await)
}
