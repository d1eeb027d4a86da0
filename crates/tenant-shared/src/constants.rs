//! Application-wide constants

pub const MAX_TENANTS: usize = 4;
pub const DEFAULT_PRIMARY_COLOR: &str = "#6366f1";
pub const DEFAULT_TENANTS_KEY: &str = "saas_tenants_v2";
pub const DEFAULT_ACTIVITY_CAPACITY: usize = 500;
pub const DEFAULT_GENERATION_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_GENERATION_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const TENANT_ID_PREFIX: &str = "T-";
pub const SUBDOMAIN_PREFIX: &str = "site-";

/// Credential values that mean the secret was never injected.
pub const CREDENTIAL_SENTINELS: [&str; 2] = ["undefined", "PLACEHOLDER"];
/// Substrings left behind by an unresolved template substitution.
pub const CREDENTIAL_TEMPLATE_MARKERS: [&str; 2] = ["process.env", "${"];
