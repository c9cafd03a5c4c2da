//! Client library for the Mamey node HTTP API.
//!
//! [`NodeClient`] maps typed calls (chain info, blocks, transactions, tokens,
//! wallets) onto the node's REST surface and classifies failures into
//! [`ClientError`]. Monetary values travel as [`Amount`], an arbitrary-precision
//! integer carried as a decimal string on the wire.
//!
//! ```rust,no_run
//! use mamey_client::{ClientConfig, NodeClient};
//!
//! # async fn example() -> Result<(), mamey_client::ClientError> {
//! let client = NodeClient::new(ClientConfig::new("http://localhost:8545"))?;
//! let height = client.get_block_number().await?;
//! let balance = client.get_balance("0xabc", "WAMPUM").await?;
//! println!("latest block {height}, balance {balance}");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod log;
pub mod models;

pub use crate::client::NodeClient;
pub use crate::config::ClientConfig;
pub use crate::error::{ClientError, ErrorKind, Service, TypedError};
pub use crate::models::Amount;
