//! Domain services (business logic)

pub mod console;
pub mod tenant_store;

pub use console::{ConsoleHealth, TenantConsole};
pub use tenant_store::TenantStore;
