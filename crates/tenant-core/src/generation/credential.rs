//! Provider credential with the provisioning precondition

use std::fmt;
use tenant_shared::constants::{CREDENTIAL_SENTINELS, CREDENTIAL_TEMPLATE_MARKERS};
use tenant_shared::utils::mask_secret;

use super::provider::GenerationError;

/// A credential that passed the provisioning check.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential(String);

impl ApiCredential {
    /// Accept `raw` unless it is missing, blank, a placeholder sentinel or an
    /// unresolved template substitution.
    pub fn resolve(raw: Option<&str>) -> Result<Self, GenerationError> {
        let value = raw.map(str::trim).unwrap_or_default();

        let unresolved = value.is_empty()
            || CREDENTIAL_SENTINELS.contains(&value)
            || CREDENTIAL_TEMPLATE_MARKERS.iter().any(|marker| value.contains(marker));

        if unresolved {
            return Err(GenerationError::Authentication);
        }

        Ok(Self(value.to_string()))
    }

    pub fn is_provisioned(raw: Option<&str>) -> bool {
        Self::resolve(raw).is_ok()
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiCredential").field(&mask_secret(&self.0)).finish()
    }
}
