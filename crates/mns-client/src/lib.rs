//! Modular Naming Service API Client
//!
//! A Rust client for the Modular Naming Service (MNS) public resolution API:
//! forward (name → address) and reverse (address → name) identity lookups
//! over plain HTTPS.

mod client;
mod error;
mod types;

pub use client::MnsClient;
pub use error::{MnsError, Result};
pub use types::{IdentityAddress, IdentityName};
