use log::{debug, warn};
use reqwest::Method;
use reqwest_middleware::ClientWithMiddleware;
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use super::operation::Operation;
use super::types::ErrorBody;
use crate::config::ClientConfig;
use crate::error::{ClientError, TypedError};

const API_KEY_HEADER: &str = "X-API-Key";
const MAX_ERROR_BODY_CHARS: usize = 200;

/// The shared transport behind a [`NodeClient`](crate::NodeClient).
///
/// Built once per client and reused by every call. Cloning shares the
/// underlying connection pool.
///
/// Configured retries only ever wrap reads. Submissions go through
/// `write_client`, which sends each request exactly once.
#[derive(Clone)]
pub(crate) struct HttpTransport {
    base_url: String,
    api_key: Option<String>,
    read_client: ClientWithMiddleware,
    write_client: ClientWithMiddleware,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        if config.timeout_secs == 0 {
            return Err(ClientError::InvalidConfig(
                "timeout_secs must be at least 1".to_string(),
            ));
        }

        let inner_client = reqwest::Client::builder().timeout(config.timeout()).build()?;

        let mut read_builder = reqwest_middleware::ClientBuilder::new(inner_client.clone());
        if config.max_retries > 0 {
            let retry_policy =
                reqwest_retry::policies::ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
            read_builder = read_builder.with(reqwest_retry::RetryTransientMiddleware::new_with_policy(retry_policy));
        }
        let write_client = reqwest_middleware::ClientBuilder::new(inner_client).build();

        Ok(Self {
            base_url: config.node_url.clone(),
            api_key: config.api_key.clone(),
            read_client: read_builder.build(),
            write_client,
        })
    }

    /// Uses `client` for every call, reads and writes alike.
    pub fn with_client(config: &ClientConfig, client: ClientWithMiddleware) -> Self {
        Self {
            base_url: config.node_url.clone(),
            api_key: config.api_key.clone(),
            read_client: client.clone(),
            write_client: client,
        }
    }

    fn client_for(&self, op: Operation) -> &ClientWithMiddleware {
        if op.method() == Method::GET {
            &self.read_client
        } else {
            &self.write_client
        }
    }

    /// Appends `segments` to the base URL, percent-encoding each one so that
    /// caller-supplied identifiers always stay a single path segment.
    fn endpoint(&self, op: Operation, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| ClientError::InvalidUrl {
            operation: op.name(),
            reason: e.to_string(),
        })?;

        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl {
                operation: op.name(),
                reason: format!("{} cannot be a base URL", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    pub async fn get<T: DeserializeOwned>(&self, op: Operation, segments: &[&str]) -> Result<T, ClientError> {
        self.execute(op, segments, None).await
    }

    pub async fn post<B, T>(&self, op: Operation, segments: &[&str], body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_vec(body).map_err(|source| ClientError::Encode {
            operation: op.name(),
            source,
        })?;
        self.execute(op, segments, Some(body)).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        op: Operation,
        segments: &[&str],
        body: Option<Vec<u8>>,
    ) -> Result<T, ClientError> {
        let url = self.endpoint(op, segments)?;
        debug!(
            operation = op.name(),
            method = op.method().as_str(),
            path = url.path();
            "HTTP: Sending request"
        );

        let mut req = self.client_for(op).request(op.method(), url);
        if let Some(api_key) = &self.api_key {
            req = req.header(API_KEY_HEADER, api_key.as_str());
        }
        if let Some(body) = body {
            req = req.header("Content-Type", "application/json").body(body);
        }

        let resp = req.send().await.map_err(|source| ClientError::Transport {
            operation: op.name(),
            source,
        })?;
        let status = resp.status().as_u16();
        let bytes = resp.bytes().await.map_err(|e| ClientError::Transport {
            operation: op.name(),
            source: e.into(),
        })?;

        if !op.status_policy().accepts(status) {
            let message = error_message(&bytes);
            warn!(
                operation = op.name(),
                status = status,
                reason = &*message;
                "HTTP: Unexpected status"
            );
            return Err(ClientError::UnexpectedStatus {
                operation: op.name(),
                error: TypedError::new(status, message, op.service()),
            });
        }

        debug!(operation = op.name(), status = status; "HTTP: Response received");
        serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode {
            operation: op.name(),
            source,
        })
    }
}

/// Extracts a human-readable message from a rejected response body.
fn error_message(body: &[u8]) -> String {
    if let Ok(ErrorBody { error, message }) = serde_json::from_slice::<ErrorBody>(body) {
        if let Some(msg) = error.or(message) {
            return msg;
        }
    }

    let text = String::from_utf8_lossy(body);
    if text.trim().is_empty() {
        return "empty response body".to_string();
    }
    text.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base_url: &str) -> HttpTransport {
        HttpTransport::new(&ClientConfig::new(base_url)).unwrap()
    }

    #[test]
    fn endpoint_appends_to_base_path() {
        let url = transport("http://node:8545/gateway")
            .endpoint(Operation::Block, &["api", "v1", "blocks", "7"])
            .unwrap();
        assert_eq!(url.as_str(), "http://node:8545/gateway/api/v1/blocks/7");
    }

    #[test]
    fn endpoint_handles_trailing_slash_without_doubling() {
        let url = transport("http://node:8545/")
            .endpoint(Operation::Health, &["health"])
            .unwrap();
        assert_eq!(url.as_str(), "http://node:8545/health");
    }

    #[test]
    fn identifiers_stay_single_segments() {
        let url = transport("http://node:8545")
            .endpoint(Operation::GetWallet, &["api", "v1", "wallets", "a/b?c"])
            .unwrap();
        assert_eq!(url.path(), "/api/v1/wallets/a%2Fb%3Fc");
        assert!(url.query().is_none());
    }

    #[test]
    fn unparsable_base_url_is_reported_per_operation() {
        let err = transport("not a url").endpoint(Operation::ChainInfo, &["x"]).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { operation: "get_chain_info", .. }));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = ClientConfig {
            timeout_secs: 0,
            ..ClientConfig::new("http://node:8545")
        };

        let err = HttpTransport::new(&config).err().unwrap();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
        assert!(err.is_infrastructure());
    }

    #[test]
    fn error_message_prefers_json_fields() {
        assert_eq!(error_message(br#"{"error":"token not found"}"#), "token not found");
        assert_eq!(error_message(br#"{"message":"slow down"}"#), "slow down");
        assert_eq!(error_message(b"gateway exploded"), "gateway exploded");
        assert_eq!(error_message(b""), "empty response body");
    }
}
