//! Parser for CAIP-2 chain identifiers
//!
//! Parses identifiers of the form `namespace:reference` (e.g. `eip155:1`)
//! into their component parts and normalizes the loose chain-id formats
//! wallets emit (decimal or 0x-hex EVM chain ids) into canonical form.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Namespace for EVM chains (EIP-155 chain ids)
pub const EIP155: &str = "eip155";

/// Parsed components of a CAIP-2 chain identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainId {
    pub namespace: String,
    pub reference: String,
}

static CHAIN_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([-a-z0-9]{3,8}):([-_a-zA-Z0-9]{1,32})$").unwrap());

impl ChainId {
    /// Parse a CAIP-2 identifier like "eip155:1" or "cosmos:cosmoshub-3"
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = CHAIN_ID_RE.captures(raw)?;
        Some(Self {
            namespace: caps[1].to_string(),
            reference: caps[2].to_string(),
        })
    }

    /// Build an identifier in the EVM namespace from a numeric chain id
    pub fn eip155(chain_id: u64) -> Self {
        Self {
            namespace: EIP155.to_string(),
            reference: chain_id.to_string(),
        }
    }

    /// Normalize a raw chain identifier into canonical CAIP-2 form.
    ///
    /// Accepts an already-formatted identifier, a decimal EVM chain id
    /// ("137"), or a 0x-hex EVM chain id ("0x89"). Returns `None` for
    /// anything else.
    pub fn normalize(raw: &str) -> Option<Self> {
        if let Some(parsed) = Self::parse(raw) {
            return Some(parsed);
        }
        if let Some(hex) = raw.strip_prefix("0x") {
            return u64::from_str_radix(hex, 16).ok().map(Self::eip155);
        }
        raw.parse::<u64>().ok().map(Self::eip155)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.reference)
    }
}
