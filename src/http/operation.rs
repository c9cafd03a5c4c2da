use std::fmt::Display;

use reqwest::Method;

use crate::error::Service;

/// Which response codes an operation treats as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Decode the body whatever the status; only a decode failure fails the call.
    Any,
    /// Fail with the status code unless it is one of these.
    Accept(&'static [u16]),
}

impl StatusPolicy {
    pub fn accepts(&self, status: u16) -> bool {
        match self {
            StatusPolicy::Any => true,
            StatusPolicy::Accept(codes) => codes.contains(&status),
        }
    }
}

/// Every call the gateway can issue.
///
/// The status policy of each call lives here so that the split between the
/// permissive chain/account calls and the strict contract, detailed
/// transaction and wallet calls can be read and tested in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ChainInfo,
    Block,
    LatestBlock,
    SendTransaction,
    Balance,
    ListTokens,
    CreateToken,
    Health,
    TokenInfo,
    TokenBalance,
    TransferToken,
    SendDetailedTransaction,
    GetDetailedTransaction,
    TransactionReceipt,
    PendingTransactions,
    CreateWallet,
    GetWallet,
}

impl Operation {
    pub const ALL: [Operation; 17] = [
        Operation::ChainInfo,
        Operation::Block,
        Operation::LatestBlock,
        Operation::SendTransaction,
        Operation::Balance,
        Operation::ListTokens,
        Operation::CreateToken,
        Operation::Health,
        Operation::TokenInfo,
        Operation::TokenBalance,
        Operation::TransferToken,
        Operation::SendDetailedTransaction,
        Operation::GetDetailedTransaction,
        Operation::TransactionReceipt,
        Operation::PendingTransactions,
        Operation::CreateWallet,
        Operation::GetWallet,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::ChainInfo => "get_chain_info",
            Operation::Block => "get_block",
            Operation::LatestBlock => "get_latest_block",
            Operation::SendTransaction => "send_transaction",
            Operation::Balance => "get_balance",
            Operation::ListTokens => "list_tokens",
            Operation::CreateToken => "create_token",
            Operation::Health => "health",
            Operation::TokenInfo => "get_token_info",
            Operation::TokenBalance => "get_token_balance",
            Operation::TransferToken => "transfer_token",
            Operation::SendDetailedTransaction => "send_detailed_transaction",
            Operation::GetDetailedTransaction => "get_detailed_transaction",
            Operation::TransactionReceipt => "get_transaction_receipt",
            Operation::PendingTransactions => "list_pending_transactions",
            Operation::CreateWallet => "create_wallet",
            Operation::GetWallet => "get_wallet",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Operation::SendTransaction
            | Operation::CreateToken
            | Operation::TransferToken
            | Operation::SendDetailedTransaction
            | Operation::CreateWallet => Method::POST,
            _ => Method::GET,
        }
    }

    pub fn status_policy(&self) -> StatusPolicy {
        match self {
            Operation::TokenInfo | Operation::TransferToken | Operation::GetDetailedTransaction | Operation::GetWallet => {
                StatusPolicy::Accept(&[200])
            },
            Operation::SendDetailedTransaction => StatusPolicy::Accept(&[200, 201]),
            Operation::CreateWallet => StatusPolicy::Accept(&[201]),
            _ => StatusPolicy::Any,
        }
    }

    /// All operations target the node API.
    pub fn service(&self) -> Service {
        Service::Node
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
