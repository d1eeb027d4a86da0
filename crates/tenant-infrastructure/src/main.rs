use anyhow::Result;
use tracing::info;

use tenant_infrastructure::build_console;
use tenant_shared::config::AppConfig;
use tenant_shared::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    init_telemetry(&config.logging)?;

    info!("Starting {} ({})", config.app.name, config.app.env);

    let console = build_console(&config).await?;
    let health = console.health();
    info!(
        credential_provisioned = health.credential_provisioned,
        tenants = health.tenant_count,
        remaining_slots = health.remaining_slots,
        "Console ready"
    );

    for tenant in console.store().tenants() {
        println!("{:<12} {:<24} {}", tenant.id, tenant.name, tenant.host("saas.io"));
    }
    for entry in console.activity().entries() {
        println!("{}", entry);
    }

    Ok(())
}
