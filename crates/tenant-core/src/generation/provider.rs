use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::domain::TenantRecord;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    #[error("[SYS-E01] AUTHENTICATION_ERROR: credential not provisioned")]
    Authentication,

    #[error("[SYS-E02] HANDSHAKE_ERROR: provider call failed or quota exhausted")]
    Handshake,
}

/// Structured copy returned by the provider. All four fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub about_section: String,
    pub suggested_color: String,
}

impl GeneratedContent {
    pub const REQUIRED_FIELDS: [&'static str; 4] =
        ["heroTitle", "heroSubtitle", "aboutSection", "suggestedColor"];

    /// Copy of `tenant` with the generated fields merged in. Blank generated
    /// values keep the tenant's prior value.
    pub fn apply_to(&self, tenant: &TenantRecord) -> TenantRecord {
        fn pick(generated: &str, prior: &str) -> String {
            if generated.trim().is_empty() {
                prior.to_string()
            } else {
                generated.to_string()
            }
        }

        let mut merged = tenant.clone();
        merged.primary_color = pick(&self.suggested_color, &tenant.primary_color);
        merged.content.hero_title = pick(&self.hero_title, &tenant.content.hero_title);
        merged.content.hero_subtitle = pick(&self.hero_subtitle, &tenant.content.hero_subtitle);
        merged.content.about_section = pick(&self.about_section, &tenant.content.about_section);
        merged
    }

    /// Prompt sent to the provider for one tenant.
    pub fn prompt(name: &str, description: &str) -> String {
        format!(
            "Generate professional landing page content for a company named \"{}\". The business description is: \"{}\".",
            name, description
        )
    }

    /// Response schema declaration the provider must conform to.
    pub fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "heroTitle": { "type": "STRING" },
                "heroSubtitle": { "type": "STRING" },
                "aboutSection": { "type": "STRING" },
                "suggestedColor": {
                    "type": "STRING",
                    "description": "A hex code that fits the brand"
                }
            },
            "required": Self::REQUIRED_FIELDS,
        })
    }
}

/// External copywriting provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Draft landing page copy for a business.
    ///
    /// Fails with `Authentication` before any network traffic when no usable
    /// credential is provisioned, and with `Handshake` for every provider,
    /// transport or parse failure.
    async fn generate(&self, description: &str, name: &str) -> Result<GeneratedContent, GenerationError>;

    /// Whether a usable credential is provisioned.
    fn is_authorized(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed_collection;

    fn generated() -> GeneratedContent {
        GeneratedContent {
            hero_title: "Roasted Right".to_string(),
            hero_subtitle: "Small batches, every day.".to_string(),
            about_section: "A family roastery.".to_string(),
            suggested_color: "#5A3E2B".to_string(),
        }
    }

    #[test]
    fn test_apply_overwrites_all_fields() {
        let tenant = seed_collection().remove(0);
        let merged = generated().apply_to(&tenant);

        assert_eq!(merged.id, tenant.id);
        assert_eq!(merged.name, tenant.name);
        assert_eq!(merged.primary_color, "#5A3E2B");
        assert_eq!(merged.content.hero_title, "Roasted Right");
        assert_eq!(merged.content.hero_subtitle, "Small batches, every day.");
        assert_eq!(merged.content.about_section, "A family roastery.");
    }

    #[test]
    fn test_apply_keeps_prior_values_for_blank_fields() {
        let tenant = seed_collection().remove(0);
        let partial = GeneratedContent {
            hero_subtitle: String::new(),
            suggested_color: "  ".to_string(),
            ..generated()
        };
        let merged = partial.apply_to(&tenant);

        assert_eq!(merged.primary_color, tenant.primary_color);
        assert_eq!(merged.content.hero_subtitle, tenant.content.hero_subtitle);
        assert_eq!(merged.content.hero_title, "Roasted Right");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let raw = r#"{"heroTitle":"a","heroSubtitle":"b","aboutSection":"c"}"#;
        assert!(serde_json::from_str::<GeneratedContent>(raw).is_err());
    }

    #[test]
    fn test_schema_requires_four_fields() {
        let schema = GeneratedContent::response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required, GeneratedContent::REQUIRED_FIELDS);
        assert_eq!(schema["properties"].as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_prompt_embeds_inputs() {
        let prompt = GeneratedContent::prompt("Coffee Lab", "Seattle roaster");
        assert!(prompt.contains("\"Coffee Lab\""));
        assert!(prompt.contains("\"Seattle roaster\""));
    }
}
