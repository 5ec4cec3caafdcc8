//! Error types for the MNS API client

use std::fmt;

/// Errors that can occur when interacting with the MNS resolution API
#[derive(Debug)]
pub enum MnsError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// Unexpected response from the API
    Api(String),
}

impl fmt::Display for MnsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "MNS HTTP error: {}", e),
            Self::Api(msg) => write!(f, "MNS API error: {}", msg),
        }
    }
}

impl std::error::Error for MnsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Api(_) => None,
        }
    }
}

impl From<reqwest::Error> for MnsError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

/// Result type for MNS API operations
pub type Result<T> = std::result::Result<T, MnsError>;
