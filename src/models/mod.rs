//! Domain records decoded from node responses.
//!
//! All records are immutable values. Every amount, balance or supply is an
//! [`Amount`]; none is ever held as a float.
//!
//! # Key Types
//!
//! - [`ChainInfo`], [`Block`] - chain metadata
//! - [`Transaction`], [`TransactionReceipt`], [`Log`] - transactions and their outcome
//! - [`Token`], [`TokenBalance`], [`TokenTransfer`] - token contracts
//! - [`Wallet`], [`WalletCreate`] - accounts
//! - [`TransactionSummary`], [`TokenSummary`] - string-valued views for older callers

mod amount;
mod chain;
mod token;
mod transaction;
mod transaction_status;
mod wallet;

pub use amount::{Amount, AmountParseError};
pub use chain::{Block, BlockId, ChainInfo, NETWORK_NAME};
pub use token::{CreateTokenRequest, Token, TokenBalance, TokenSummary, TokenTransfer, TransferTokenRequest};
pub use transaction::{
    Log, Transaction, TransactionReceipt, TransactionRequest, TransactionSubmission, TransactionSummary,
};
pub use transaction_status::TransactionStatus;
pub use wallet::{Wallet, WalletCreate};
