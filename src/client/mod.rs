//! The remote node gateway.
//!
//! [`NodeClient`] turns typed calls into requests against the node API and
//! decodes the answers. Each call is one request on a shared transport;
//! nothing is cached and nothing is retried unless retries were configured
//! on the transport itself.
//!
//! Calls differ in how strictly they treat status codes; see
//! [`Operation::status_policy`](crate::http::Operation::status_policy).

mod chain;
mod tokens;
mod transactions;
mod wallets;

use reqwest_middleware::ClientWithMiddleware;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::HttpTransport;

pub(crate) const API_PREFIX: [&str; 2] = ["api", "v1"];

/// Builds `api/v1/<segments..>`.
pub(crate) fn api_path<'a>(segments: &[&'a str]) -> Vec<&'a str> {
    API_PREFIX.iter().copied().chain(segments.iter().copied()).collect()
}

/// Client for a single Mamey node.
///
/// Safe to share across tasks; no call mutates client state.
///
/// # Example
///
/// ```rust,no_run
/// use mamey_client::{Amount, ClientConfig, NodeClient};
///
/// # async fn example() -> Result<(), mamey_client::ClientError> {
/// let client = NodeClient::new(ClientConfig::new("http://localhost:8545"))?;
///
/// if client.health().await? {
///     let info = client.get_chain_info().await?;
///     println!("{} at height {}", info.name, info.block_height);
///
///     let hash = client
///         .send_transaction("0xfrom", "0xto", &Amount::from(1_000u64), None)
///         .await?;
///     println!("submitted {hash}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct NodeClient {
    config: ClientConfig,
    transport: HttpTransport,
}

impl NodeClient {
    /// Creates a client and its transport from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] if the HTTP client cannot be
    /// initialised (e.g. TLS backend failure).
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }

    /// Creates a client that sends through an already built transport.
    ///
    /// `config.timeout_secs` and `config.max_retries` are ignored; the given
    /// client's own settings apply.
    pub fn with_transport(config: ClientConfig, client: ClientWithMiddleware) -> Self {
        let transport = HttpTransport::with_client(&config, client);
        Self { config, transport }
    }

    /// Shorthand for `NodeClient::new(ClientConfig::new(node_url))`.
    pub fn with_url(node_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(ClientConfig::new(node_url))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn node_url(&self) -> &str {
        &self.config.node_url
    }

    pub fn identity_url(&self) -> &str {
        &self.config.identity_url
    }

    pub fn treasury_url(&self) -> &str {
        &self.config.treasury_url
    }

    pub fn zkp_url(&self) -> &str {
        &self.config.zkp_url
    }
}
