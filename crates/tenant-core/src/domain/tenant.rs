// ============================================================================
// Tenant Core - Tenant Record Entity
// File: crates/tenant-core/src/domain/tenant.rs
// Description: Tenant site configuration with theme and landing page copy
// ============================================================================

use serde::{Deserialize, Serialize};
use tenant_shared::constants::{DEFAULT_PRIMARY_COLOR, SUBDOMAIN_PREFIX};
use tenant_shared::utils::normalize_subdomain;
use tenant_shared::TenantId;

/// Landing page theme enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    Modern,
    Elegant,
    Minimal,
    Tech,
}

impl ThemeVariant {
    pub const ALL: [ThemeVariant; 4] = [
        ThemeVariant::Modern,
        ThemeVariant::Elegant,
        ThemeVariant::Minimal,
        ThemeVariant::Tech,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeVariant::Modern => "modern",
            ThemeVariant::Elegant => "elegant",
            ThemeVariant::Minimal => "minimal",
            ThemeVariant::Tech => "tech",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "modern" => Some(ThemeVariant::Modern),
            "elegant" => Some(ThemeVariant::Elegant),
            "minimal" => Some(ThemeVariant::Minimal),
            "tech" => Some(ThemeVariant::Tech),
            _ => None,
        }
    }
}

impl Default for ThemeVariant {
    fn default() -> Self {
        ThemeVariant::Modern
    }
}

/// Landing page copy. Empty strings are the unset state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub about_section: String,
}

impl SiteContent {
    pub fn is_blank(&self) -> bool {
        self.hero_title.is_empty() && self.hero_subtitle.is_empty() && self.about_section.is_empty()
    }
}

/// Tenant site configuration.
///
/// Records are provisioned by the tenant store and edited as copies that are
/// written back whole through `TenantStore::update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct TenantRecord {
    pub id: TenantId,
    pub name: String,
    pub subdomain: String,
    pub primary_color: String,
    #[serde(default)]
    pub theme: ThemeVariant,
    pub description: String,
    pub is_active: bool,
    #[serde(default)]
    pub content: SiteContent,
}

impl TenantRecord {
    /// Default record for the `ordinal`-th tenant, created at `now_millis`.
    pub(crate) fn provision(id: TenantId, ordinal: usize, now_millis: i64) -> Self {
        Self {
            id,
            name: format!("Project {}", ordinal),
            subdomain: format!("{}{:04}", SUBDOMAIN_PREFIX, now_millis.rem_euclid(10_000)),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            theme: ThemeVariant::Modern,
            description: String::new(),
            is_active: true,
            content: SiteContent::default(),
        }
    }

    /// Set the subdomain from raw user input.
    pub fn set_subdomain(&mut self, input: &str) {
        self.subdomain = normalize_subdomain(input);
    }

    pub fn with_subdomain(mut self, input: &str) -> Self {
        self.set_subdomain(input);
        self
    }

    /// Host name the tenant site is served under.
    pub fn host(&self, base_domain: &str) -> String {
        format!("{}.{}", self.subdomain, base_domain)
    }

    /// Name and description are the inputs content generation needs.
    pub fn has_generation_input(&self) -> bool {
        !self.name.trim().is_empty() && !self.description.trim().is_empty()
    }
}

/// Collection used when nothing has been saved yet.
pub fn seed_collection() -> Vec<TenantRecord> {
    vec![TenantRecord {
        id: "T-001".to_string(),
        name: "Coffee Lab".to_string(),
        subdomain: "coffeelab".to_string(),
        primary_color: "#8B4513".to_string(),
        theme: ThemeVariant::Modern,
        description: "Artisanal coffee roaster and cafe based in Seattle.".to_string(),
        is_active: true,
        content: SiteContent {
            hero_title: "Better Coffee for Better Mornings".to_string(),
            hero_subtitle: "Freshly roasted beans delivered from our shop to your doorstep."
                .to_string(),
            about_section:
                "Founded in 2022, Coffee Lab focuses on sustainable sourcing and perfect extraction."
                    .to_string(),
        },
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provision_defaults() {
        let tenant = TenantRecord::provision("T-ABCDEF12".to_string(), 3, 1_700_000_012_345);
        assert_eq!(tenant.name, "Project 3");
        assert_eq!(tenant.subdomain, "site-2345");
        assert_eq!(tenant.primary_color, "#6366f1");
        assert_eq!(tenant.theme, ThemeVariant::Modern);
        assert!(tenant.description.is_empty());
        assert!(tenant.is_active);
        assert!(tenant.content.is_blank());
    }

    #[test]
    fn test_subdomain_pads_short_timestamps() {
        let tenant = TenantRecord::provision("T-1".to_string(), 1, 10_007);
        assert_eq!(tenant.subdomain, "site-0007");
    }

    #[test]
    fn test_theme_round_trip_names() {
        for theme in ThemeVariant::ALL {
            assert_eq!(ThemeVariant::from_str(theme.as_str()), Some(theme));
        }
        assert_eq!(ThemeVariant::from_str(" Elegant "), Some(ThemeVariant::Elegant));
        assert_eq!(ThemeVariant::from_str("brutalist"), None);
    }

    #[test]
    fn test_json_uses_camel_case_fields() {
        let tenant = seed_collection().remove(0);
        let json = serde_json::to_value(&tenant).unwrap();
        assert_eq!(json["primaryColor"], "#8B4513");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["theme"], "modern");
        assert_eq!(json["content"]["heroTitle"], "Better Coffee for Better Mornings");
    }

    #[test]
    fn test_missing_content_reads_as_empty() {
        let raw = r##"{
            "id": "T-9",
            "name": "Legacy",
            "subdomain": "legacy",
            "primaryColor": "#000000",
            "theme": "tech",
            "description": "",
            "isActive": true
        }"##;
        let tenant: TenantRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(tenant.content, SiteContent::default());
        assert_eq!(tenant.theme, ThemeVariant::Tech);
    }

    #[test]
    fn test_set_subdomain_normalizes() {
        let tenant = seed_collection().remove(0).with_subdomain("My Shop ");
        assert_eq!(tenant.subdomain, "myshop");
        assert_eq!(tenant.host("saas.io"), "myshop.saas.io");
    }

    #[test]
    fn test_generation_input() {
        let mut tenant = TenantRecord::provision("T-2".to_string(), 1, 0);
        assert!(!tenant.has_generation_input());
        tenant.description = "Bakery".to_string();
        assert!(tenant.has_generation_input());
        tenant.name = "   ".to_string();
        assert!(!tenant.has_generation_input());
    }
}
