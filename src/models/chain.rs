use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Network name reported by [`ChainInfo`]. The node's own value for this
/// field is replaced with this constant after decoding.
pub const NETWORK_NAME: &str = "MAMEY-MAINNET";

/// Snapshot of the network state from `/api/v1/stats`.
///
/// `block_height` counts one past the latest block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainInfo {
    pub chain_id: u64,
    #[serde(default)]
    pub name: String,
    pub block_height: u64,
    #[serde(default)]
    pub transaction_count: u64,
    #[serde(default)]
    pub token_count: u64,
    #[serde(default)]
    pub account_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub number: u64,
    pub hash: String,
    pub parent_hash: String,
    pub timestamp: u64,
    #[serde(default)]
    pub miner: String,
    #[serde(default)]
    pub gas_used: u64,
    /// Hashes of the transactions in this block, in block order.
    #[serde(default)]
    pub transactions: Vec<String>,
}

/// Selects a block by height or by hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockId {
    Number(u64),
    Hash(String),
}

impl Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockId::Number(number) => write!(f, "{}", number),
            BlockId::Hash(hash) => write!(f, "{}", hash),
        }
    }
}

impl From<u64> for BlockId {
    fn from(number: u64) -> Self {
        BlockId::Number(number)
    }
}

impl From<&str> for BlockId {
    fn from(hash: &str) -> Self {
        BlockId::Hash(hash.to_string())
    }
}

impl From<String> for BlockId {
    fn from(hash: String) -> Self {
        BlockId::Hash(hash)
    }
}
