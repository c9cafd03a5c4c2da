use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mamey")]
#[command(about = "Query a Mamey node over its HTTP API", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Path to a client config file (TOML)")]
    pub config: Option<PathBuf>,
    #[arg(short = 'u', long, global = true, help = "Node API base URL, overrides the config file")]
    pub node_url: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show network statistics
    Info,
    /// Show the number of the latest block
    BlockNumber,
    /// Show a block by number or hash
    Block {
        #[arg(help = "Block number or hash")]
        id: String,
    },
    /// Show the latest block
    LatestBlock,
    /// Show an account balance for one token
    Balance {
        #[arg(help = "Account address")]
        address: String,
        #[arg(short, long, help = "Token symbol", default_value = "WAMPUM")]
        token: String,
    },
    /// List registered tokens
    Tokens,
    /// Show a token contract
    Token {
        #[arg(help = "Token contract address")]
        contract: String,
    },
    /// Show a wallet's balance in a token contract
    TokenBalance {
        #[arg(help = "Token contract address")]
        contract: String,
        #[arg(help = "Wallet address")]
        wallet: String,
    },
    /// Show a transaction by hash
    Tx {
        #[arg(help = "Transaction hash")]
        hash: String,
    },
    /// Show the receipt of a transaction
    Receipt {
        #[arg(help = "Transaction hash")]
        hash: String,
    },
    /// List pending transactions
    Pending,
    /// Show a wallet
    Wallet {
        #[arg(help = "Wallet address")]
        address: String,
    },
    /// Check node health
    Health,
    /// Write the default client configuration to a file
    InitConfig {
        #[arg(short, long, help = "Path to write", default_value = "config/client.toml")]
        output: PathBuf,
    },
}
