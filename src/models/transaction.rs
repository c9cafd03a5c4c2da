use serde::{Deserialize, Serialize};

use super::{Amount, TransactionStatus};

/// A transaction as reported by the node.
///
/// This is the single canonical shape. The lighter string-valued form older
/// endpoints used is available as [`Transaction::summary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: String,
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(alias = "amount")]
    pub value: Amount,
    #[serde(default)]
    pub nonce: u64,
    #[serde(default)]
    pub gas_price: Amount,
    #[serde(default)]
    pub status: TransactionStatus,
    #[serde(default)]
    pub block_number: Option<u64>,
    #[serde(default)]
    pub timestamp: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// String-valued view of a [`Transaction`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionSummary {
    pub hash: String,
    pub from: String,
    pub to: String,
    pub value: String,
    pub status: String,
}

impl Transaction {
    pub fn summary(&self) -> TransactionSummary {
        TransactionSummary::from(self)
    }

    pub fn is_pending(&self) -> bool {
        self.block_number.is_none() || self.status == TransactionStatus::Pending
    }
}

impl From<&Transaction> for TransactionSummary {
    fn from(tx: &Transaction) -> Self {
        Self {
            hash: tx.hash.clone(),
            from: tx.from.clone(),
            to: tx.to.clone(),
            value: tx.value.to_string(),
            status: tx.status.to_string(),
        }
    }
}

/// Parameters for a full transaction submission.
///
/// Optional fields left as `None` are omitted from the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    pub value: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl TransactionRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>, value: Amount) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            value,
            ..Default::default()
        }
    }
}

/// The node's acknowledgement of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSubmission {
    #[serde(alias = "tx_hash", alias = "transaction_hash")]
    pub hash: String,
    #[serde(default)]
    pub status: TransactionStatus,
}

/// Event record emitted while executing a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Log {
    pub address: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub data: String,
}

/// Outcome of an executed transaction. `logs` keep on-chain order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    #[serde(alias = "transaction_hash", alias = "hash")]
    pub tx_hash: String,
    pub status: TransactionStatus,
    #[serde(default)]
    pub block_number: Option<u64>,
    #[serde(default)]
    pub gas_used: u64,
    #[serde(default)]
    pub logs: Vec<Log>,
}
