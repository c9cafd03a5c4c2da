use log::{debug, warn};

use super::{NodeClient, api_path};
use crate::error::ClientError;
use crate::http::Operation;
use crate::http::types::{BlockEnvelope, HealthResponse};
use crate::models::{Block, BlockId, ChainInfo, NETWORK_NAME};

const HEALTHY: &str = "healthy";

impl NodeClient {
    /// Fetches network statistics from `/api/v1/stats`.
    ///
    /// The returned `name` is always [`NETWORK_NAME`]; whatever the node
    /// reports for it is discarded.
    pub async fn get_chain_info(&self) -> Result<ChainInfo, ClientError> {
        debug!("HTTP: Requesting chain info");
        let mut info: ChainInfo = self.transport.get(Operation::ChainInfo, &api_path(&["stats"])).await?;
        info.name = NETWORK_NAME.to_string();
        Ok(info)
    }

    /// Number of the latest block.
    ///
    /// The node's `block_height` is one past the latest block, so this is
    /// `block_height - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::EmptyChain`] when the reported height is zero.
    pub async fn get_block_number(&self) -> Result<u64, ClientError> {
        let info = self.get_chain_info().await?;
        info.block_height.checked_sub(1).ok_or(ClientError::EmptyChain)
    }

    /// Fetches a block by number or hash.
    pub async fn get_block(&self, id: impl Into<BlockId>) -> Result<Block, ClientError> {
        let id = id.into().to_string();
        debug!(block = &*id; "HTTP: Requesting block");
        let envelope: BlockEnvelope = self.transport.get(Operation::Block, &api_path(&["blocks", id.as_str()])).await?;
        Ok(envelope.block)
    }

    pub async fn get_latest_block(&self) -> Result<Block, ClientError> {
        let envelope: BlockEnvelope = self
            .transport
            .get(Operation::LatestBlock, &api_path(&["blocks", "latest"]))
            .await?;
        Ok(envelope.block)
    }

    /// Queries `/health`. `true` only when the node reports `"healthy"`.
    ///
    /// # Errors
    ///
    /// Transport and decode failures are returned as errors; use
    /// [`is_online`](Self::is_online) to fold them into `false`.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let response: HealthResponse = self.transport.get(Operation::Health, &["health"]).await?;
        Ok(response.status == HEALTHY)
    }

    pub async fn is_online(&self) -> bool {
        match self.health().await {
            Ok(true) => {
                debug!("Node is online");
                true
            },
            Ok(false) => {
                warn!("Node reports unhealthy");
                false
            },
            Err(e) => {
                warn!(
                    error:% = e;
                    "Node is offline"
                );
                false
            },
        }
    }
}
