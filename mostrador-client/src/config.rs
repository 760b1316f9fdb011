//! Client configuration

use std::sync::Arc;

use crate::client::NetworkHttpClient;
use crate::credential::CredentialProvider;
use crate::error::ClientError;

/// Client configuration for connecting to the inventory backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://localhost:3000/api")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a network HTTP client from this configuration
    pub fn build_http_client(
        &self,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<NetworkHttpClient, ClientError> {
        NetworkHttpClient::from_config(self, credentials)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000/api")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, 30);
        assert!(config.base_url.starts_with("http://"));
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("https://tienda.example/api").with_timeout(5);
        assert_eq!(config.base_url, "https://tienda.example/api");
        assert_eq!(config.timeout, 5);
    }
}
