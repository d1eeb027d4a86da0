//! # Tenant Core - Domain Module
//! 
//! Domain entities for the tenant site console.

pub mod tenant;

pub use tenant::{seed_collection, SiteContent, TenantRecord, ThemeVariant};
