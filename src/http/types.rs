//! Wire envelopes. These shapes exist only to be unwrapped by the gateway.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Amount, Block, Token, Transaction};

#[derive(Debug, Deserialize)]
pub struct BlockEnvelope {
    pub block: Block,
}

#[derive(Debug, Deserialize)]
pub struct TokensEnvelope {
    pub tokens: Vec<Token>,
}

#[derive(Debug, Deserialize)]
pub struct TransactionsEnvelope {
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Deserialize)]
pub struct TxHashEnvelope {
    #[serde(alias = "tx_hash", alias = "transaction_hash")]
    pub hash: String,
}

/// Per-symbol balances of an account, values verbatim as the node sent them.
#[derive(Debug, Deserialize)]
pub struct AccountBalances {
    pub balances: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct SymbolEnvelope {
    pub symbol: String,
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error body some endpoints attach to a rejected request.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SendTransactionBody<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub value: &'a Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a str>,
}
