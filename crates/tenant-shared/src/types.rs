//! Common types

use uuid::Uuid;

use crate::constants::TENANT_ID_PREFIX;

pub type TenantId = String;

/// Fresh tenant id of the form `T-XXXXXXXX`.
pub fn new_tenant_id() -> TenantId {
    let raw = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("{}{}", TENANT_ID_PREFIX, &raw[..8])
}
