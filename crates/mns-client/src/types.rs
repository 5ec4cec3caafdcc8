use serde::{Deserialize, Serialize};

/// Identity record returned by the reverse (address → name) lookup.
///
/// Registrations without a primary name come back with `name` absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityName {
    pub name: Option<String>,
}

/// Resolver record returned by the forward (name → address) lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityAddress {
    pub resolver_address: String,
}
