//! Error types for the bridge service

use std::fmt;

#[derive(Debug)]
pub enum BridgeError {
    /// Configuration error
    Config(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for BridgeError {}

impl From<tracing_subscriber::filter::ParseError> for BridgeError {
    fn from(e: tracing_subscriber::filter::ParseError) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
