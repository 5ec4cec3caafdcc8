//! MNS API HTTP client

use std::time::Duration;

use tracing::debug;

use crate::error::{MnsError, Result};
use crate::types::{IdentityAddress, IdentityName};

/// Client for the Modular Naming Service public resolution API
///
/// Holds an HTTP client and a base URL, both fixed at construction. The
/// client keeps no per-lookup state; every call is one request/response
/// round trip against the remote resolver.
pub struct MnsClient {
    http: reqwest::Client,
    base_url: String,
}

impl MnsClient {
    /// Base URL for the public MNS resolution API
    pub const DEFAULT_BASE_URL: &'static str = "https://api.modular.name/api/public";

    /// Create a new client with default settings (30 second timeout)
    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL)
    }

    /// Create a new client with a custom API base URL
    pub fn with_base_url(base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Look up the identity name registered for an address (reverse lookup)
    ///
    /// Returns `Ok(None)` when no identity is registered for the address.
    ///
    /// # Arguments
    /// * `address` - Account address to look up
    /// * `chain_id` - CAIP-2 chain identifier (e.g. "eip155:1")
    pub async fn get_identity_name(
        &self,
        address: &str,
        chain_id: &str,
    ) -> Result<Option<IdentityName>> {
        let url = format!(
            "{}/identity/name?address={}&chainId={}",
            self.base_url,
            urlencoding::encode(address),
            urlencoding::encode(chain_id)
        );
        debug!(address, chain_id, "Looking up identity name");

        let response = self.http.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(MnsError::Api(format!(
                "MNS returned status {}",
                response.status()
            )));
        }

        // The API answers a JSON null body for unregistered addresses
        Ok(response.json().await?)
    }

    /// Look up the resolver address for an identity name (forward lookup)
    ///
    /// Returns `Ok(None)` when the name is not registered. Callers are
    /// expected to pass a canonical name (no `@` prefix, no dot suffix).
    ///
    /// # Arguments
    /// * `name` - Canonical identity name to resolve
    /// * `chain_id` - CAIP-2 chain identifier (e.g. "eip155:1")
    pub async fn get_identity_address(
        &self,
        name: &str,
        chain_id: &str,
    ) -> Result<Option<IdentityAddress>> {
        let url = format!(
            "{}/identity/address?name={}&chainId={}",
            self.base_url,
            urlencoding::encode(name),
            urlencoding::encode(chain_id)
        );
        debug!(name, chain_id, "Looking up identity address");

        let response = self.http.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(MnsError::Api(format!(
                "MNS returned status {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}

impl Default for MnsClient {
    fn default() -> Self {
        Self::new()
    }
}
