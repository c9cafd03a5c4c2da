//! Client configuration.
//!
//! [`ClientConfig`] is the only input to [`NodeClient`](crate::NodeClient)
//! construction. Every field has a documented default so that
//! `ClientConfig::new(node_url)` is enough for a local node.

mod loader;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use loader::{get_default_config, load_configuration, write_config_to};

/// Default address of the node API.
pub const DEFAULT_NODE_URL: &str = "http://localhost:8545";
/// Default address of the identity service.
pub const DEFAULT_IDENTITY_URL: &str = "http://localhost:5001";
/// Default address of the zero-knowledge-proof service.
pub const DEFAULT_ZKP_URL: &str = "http://localhost:5002";
/// Default address of the treasury service.
pub const DEFAULT_TREASURY_URL: &str = "http://localhost:5003";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for a [`NodeClient`](crate::NodeClient).
///
/// URLs are stored exactly as given. No trailing-slash stripping or other
/// normalisation happens here; paths are appended verbatim at request time.
///
/// The identity, treasury and zkp URLs are carried as configuration only.
/// No operation in this crate issues requests against them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub node_url: String,
    pub identity_url: String,
    pub treasury_url: String,
    pub zkp_url: String,
    pub timeout_secs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Retries performed by the transport on transient failures of reads.
    /// Submissions are always sent once. Zero means every call is a single
    /// attempt.
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NODE_URL)
    }
}

impl ClientConfig {
    pub fn new(node_url: impl Into<String>) -> Self {
        Self {
            node_url: node_url.into(),
            identity_url: DEFAULT_IDENTITY_URL.to_string(),
            treasury_url: DEFAULT_TREASURY_URL.to_string(),
            zkp_url: DEFAULT_ZKP_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_key: None,
            max_retries: 0,
        }
    }

    pub fn with_identity_url(mut self, url: impl Into<String>) -> Self {
        self.identity_url = url.into();
        self
    }

    pub fn with_treasury_url(mut self, url: impl Into<String>) -> Self {
        self.treasury_url = url.into();
        self
    }

    pub fn with_zkp_url(mut self, url: impl Into<String>) -> Self {
        self.zkp_url = url.into();
        self
    }

    /// Stored in whole seconds, rounded up, so any non-zero duration keeps
    /// a usable timeout of at least one second.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
