use serde::{Deserialize, Serialize};

use super::Amount;

/// A fungible token definition.
///
/// Token listings and contract lookups both decode into this shape; the
/// string-valued listing form is available as [`Token::summary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub decimals: u8,
    #[serde(default)]
    pub total_supply: Amount,
    #[serde(default)]
    pub owner: String,
    #[serde(default, alias = "contract", skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    #[serde(default)]
    pub mintable: bool,
    #[serde(default)]
    pub burnable: bool,
}

/// String-valued view of a [`Token`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenSummary {
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    pub total_supply: String,
    pub owner: String,
}

impl Token {
    pub fn summary(&self) -> TokenSummary {
        TokenSummary::from(self)
    }
}

impl From<&Token> for TokenSummary {
    fn from(token: &Token) -> Self {
        Self {
            symbol: token.symbol.clone(),
            name: token.name.clone(),
            decimals: token.decimals,
            total_supply: token.total_supply.to_string(),
            owner: token.owner.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTokenRequest {
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    pub initial_supply: Amount,
    pub owner: String,
}

/// Balance of one wallet in one token contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    #[serde(default)]
    pub contract: String,
    #[serde(default, alias = "address")]
    pub wallet: String,
    pub balance: Amount,
}

/// Body of a token transfer. Carries the sender's private key, so its
/// `Debug` output is redacted.
#[derive(Clone, Serialize)]
pub struct TransferTokenRequest {
    pub from: String,
    pub to: String,
    pub contract: String,
    pub amount: Amount,
    pub private_key: String,
}

impl std::fmt::Debug for TransferTokenRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransferTokenRequest")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("contract", &self.contract)
            .field("amount", &self.amount)
            .field("private_key", &"<REDACTED>")
            .finish()
    }
}

/// Result of a completed token transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTransfer {
    pub from: String,
    pub to: String,
    pub amount: Amount,
    #[serde(alias = "contract")]
    pub token: String,
    #[serde(alias = "hash", alias = "transaction_hash")]
    pub tx_hash: String,
}
