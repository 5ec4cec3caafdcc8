//! Host callback contract types
//!
//! Wire shapes exchanged with the wallet runtime, camelCase on the wire.
//! TypeScript bindings are exported for the host-side shim.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::content::Content;

/// Name-lookup request issued by the wallet runtime during recipient entry.
///
/// Exactly one of `address` (reverse lookup) or `domain` (forward lookup) is
/// expected; requests carrying neither resolve to nothing.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    pub chain_id: String,
}

/// A domain resolved from an address (reverse lookup)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDomain {
    pub resolved_domain: String,
    pub protocol: String,
}

/// An address resolved from a domain (forward lookup).
///
/// `domain_name` carries the original user-typed string, not the canonical
/// lookup key, so the host displays exactly what the user entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAddress {
    pub resolved_address: String,
    pub domain_name: String,
    pub protocol: String,
}

/// Successful outcome of a name lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(untagged)]
pub enum NameLookupResult {
    #[serde(rename_all = "camelCase")]
    Domains { resolved_domains: Vec<ResolvedDomain> },
    #[serde(rename_all = "camelCase")]
    Addresses {
        resolved_addresses: Vec<ResolvedAddress>,
    },
}

impl NameLookupResult {
    /// Single-entry reverse-lookup result
    pub fn domain(resolved_domain: impl Into<String>, protocol: impl Into<String>) -> Self {
        Self::Domains {
            resolved_domains: vec![ResolvedDomain {
                resolved_domain: resolved_domain.into(),
                protocol: protocol.into(),
            }],
        }
    }

    /// Single-entry forward-lookup result
    pub fn address(
        resolved_address: impl Into<String>,
        domain_name: impl Into<String>,
        protocol: impl Into<String>,
    ) -> Self {
        Self::Addresses {
            resolved_addresses: vec![ResolvedAddress {
                resolved_address: resolved_address.into(),
                domain_name: domain_name.into(),
                protocol: protocol.into(),
            }],
        }
    }
}

/// Transaction descriptor handed over for review.
///
/// Only the recipient matters here; the runtime sends more fields and serde
/// drops them on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

/// Annotation returned from the transaction-review callback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct TransactionInsights {
    pub content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_request_from_wire() {
        let request: LookupRequest =
            serde_json::from_value(json!({ "domain": "@alice.mns", "chainId": "eip155:1" }))
                .unwrap();
        assert_eq!(request.domain.as_deref(), Some("@alice.mns"));
        assert_eq!(request.address, None);
        assert_eq!(request.chain_id, "eip155:1");
    }

    #[test]
    fn test_resolved_addresses_wire_shape() {
        let result = NameLookupResult::address("0xDEF", "@alice.mns", "Modular Naming Service");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "resolvedAddresses": [{
                    "resolvedAddress": "0xDEF",
                    "domainName": "@alice.mns",
                    "protocol": "Modular Naming Service"
                }]
            })
        );
    }

    #[test]
    fn test_resolved_domains_wire_shape() {
        let result = NameLookupResult::domain("alice", "Modular Naming Service");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "resolvedDomains": [{
                    "resolvedDomain": "alice",
                    "protocol": "Modular Naming Service"
                }]
            })
        );
    }

    #[test]
    fn test_transaction_ignores_unknown_fields() {
        let transaction: Transaction = serde_json::from_value(json!({
            "to": "0xABC",
            "value": "0x0",
            "data": "0x",
            "gasLimit": "0x5208"
        }))
        .unwrap();
        assert_eq!(transaction.to.as_deref(), Some("0xABC"));
    }
}
