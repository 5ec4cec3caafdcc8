//! Resolution adapter between the wallet runtime and the MNS API

use caip2::ChainId;
use mns_client::{IdentityAddress, IdentityName, MnsClient};
use tracing::error;

use crate::content::{address, heading, panel, row, text};
use crate::domain::canonicalize;
use crate::types::{LookupRequest, NameLookupResult, Transaction, TransactionInsights};

/// Display label identifying the resolution protocol in lookup results
pub const PROTOCOL: &str = "Modular Naming Service";

const INSIGHTS_HEADING: &str = "Recipient Insights";
/// Identity label for registrations without a primary name
const NO_NAME: &str = "n/a";
/// Identity label when the lookup itself failed
const LOOKUP_UNAVAILABLE: &str = "unavailable";

/// Remote name-resolution operations the adapter dispatches to.
///
/// [`MnsClient`] is the production implementation; tests substitute stubs.
#[allow(async_fn_in_trait)]
pub trait NameService {
    /// Reverse lookup: the identity registered for an address
    async fn identity_name(
        &self,
        address: &str,
        chain_id: &str,
    ) -> mns_client::Result<Option<IdentityName>>;

    /// Forward lookup: the resolver address for a canonical identity name
    async fn identity_address(
        &self,
        name: &str,
        chain_id: &str,
    ) -> mns_client::Result<Option<IdentityAddress>>;
}

impl NameService for MnsClient {
    async fn identity_name(
        &self,
        address: &str,
        chain_id: &str,
    ) -> mns_client::Result<Option<IdentityName>> {
        self.get_identity_name(address, chain_id).await
    }

    async fn identity_address(
        &self,
        name: &str,
        chain_id: &str,
    ) -> mns_client::Result<Option<IdentityAddress>> {
        self.get_identity_address(name, chain_id).await
    }
}

/// Translates host-runtime callbacks into MNS lookups and shapes the results.
///
/// Stateless aside from the service handle; every call is one request/response
/// cycle with at most one remote round trip, and no error ever crosses back
/// to the host.
pub struct ResolutionAdapter<S> {
    service: S,
}

impl<S: NameService> ResolutionAdapter<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Handle the recipient-entry name lookup callback.
    ///
    /// An `address` in the request selects the reverse branch, otherwise a
    /// non-empty `domain` selects the forward branch; anything else is no
    /// result. Remote failures are logged and reported as no result,
    /// indistinguishable from an unknown name at the host boundary.
    pub async fn handle_name_lookup(&self, request: &LookupRequest) -> Option<NameLookupResult> {
        let chain_id = canonical_chain_id(&request.chain_id);

        if let Some(addr) = request.address.as_deref() {
            return match self.service.identity_name(addr, &chain_id).await {
                Ok(identity) => identity
                    .and_then(|i| i.name)
                    .map(|name| NameLookupResult::domain(name, PROTOCOL)),
                Err(e) => {
                    error!(error = %e, address = addr, "MNS reverse lookup failed");
                    None
                }
            };
        }

        let domain = request.domain.as_deref().filter(|d| !d.is_empty())?;

        match self
            .service
            .identity_address(canonicalize(domain), &chain_id)
            .await
        {
            Ok(resolved) => resolved
                .map(|r| NameLookupResult::address(r.resolver_address, domain, PROTOCOL)),
            Err(e) => {
                error!(error = %e, domain, "MNS forward lookup failed");
                None
            }
        }
    }

    /// Handle the transaction-review callback.
    ///
    /// Returns `None` only when the transaction has no recipient. A failed
    /// lookup still yields a panel: the identity row degrades to a
    /// placeholder while the recipient address is always shown.
    pub async fn handle_transaction(
        &self,
        transaction: &Transaction,
        chain_id: &str,
    ) -> Option<TransactionInsights> {
        let to = transaction.to.as_deref()?;
        let chain_id = canonical_chain_id(chain_id);

        let identity_label = match self.service.identity_name(to, &chain_id).await {
            Ok(identity) => identity
                .and_then(|i| i.name)
                .unwrap_or_else(|| NO_NAME.to_string()),
            Err(e) => {
                error!(error = %e, address = to, "MNS transaction lookup failed");
                LOOKUP_UNAVAILABLE.to_string()
            }
        };

        Some(TransactionInsights {
            content: panel(vec![
                heading(INSIGHTS_HEADING),
                row("Identity", text(identity_label)),
                row("Address", address(to)),
            ]),
        })
    }
}

/// Format the host-supplied chain identifier consistently for the API,
/// passing unrecognized values through untouched
fn canonical_chain_id(raw: &str) -> String {
    match ChainId::normalize(raw) {
        Some(chain) => chain.to_string(),
        None => raw.to_string(),
    }
}
