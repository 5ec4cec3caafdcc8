//! MNS Wallet Snap Core
//!
//! The resolution adapter between a host wallet runtime and the Modular
//! Naming Service: normalizes user-typed identity names, dispatches lookups
//! to the remote resolution API, and shapes the results for the host's
//! recipient-entry and transaction-review callbacks.

mod adapter;
mod content;
mod domain;
mod types;

pub use adapter::{NameService, ResolutionAdapter, PROTOCOL};
pub use content::Content;
pub use domain::canonicalize;
pub use types::{
    LookupRequest, NameLookupResult, ResolvedAddress, ResolvedDomain, Transaction,
    TransactionInsights,
};
