use std::env;

use mns_client::MnsClient;

/// Service configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub mns_api_url: String,
}

impl Config {
    /// Parse configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3006);

        let mns_api_url =
            env::var("MNS_API_URL").unwrap_or_else(|_| MnsClient::DEFAULT_BASE_URL.to_string());

        Self { port, mns_api_url }
    }
}
