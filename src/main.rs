use anyhow::Context;
use clap::Parser;
use log::error;
use serde::Serialize;

use mamey_client::cli::{Cli, Commands};
use mamey_client::config::{get_default_config, load_configuration, write_config_to};
use mamey_client::log::init_logging;
use mamey_client::models::BlockId;
use mamey_client::NodeClient;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {:#}", e);
    }

    if let Err(e) = run(cli).await {
        error!(error:% = e; "Command failed");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), anyhow::Error> {
    if let Commands::InitConfig { output } = &cli.command {
        write_config_to(output, get_default_config())?;
        println!("Wrote default configuration to {}", output.display());
        return Ok(());
    }

    let mut config = load_configuration(cli.config.as_deref())?;
    if let Some(node_url) = cli.node_url {
        config.node_url = node_url;
    }
    let client = NodeClient::new(config).context("Could not create node client")?;

    match cli.command {
        Commands::Info => print_json(&client.get_chain_info().await?),
        Commands::BlockNumber => print_json(&client.get_block_number().await?),
        Commands::Block { id } => {
            let id = match id.parse::<u64>() {
                Ok(number) => BlockId::Number(number),
                Err(_) => BlockId::Hash(id),
            };
            print_json(&client.get_block(id).await?)
        },
        Commands::LatestBlock => print_json(&client.get_latest_block().await?),
        Commands::Balance { address, token } => print_json(&client.get_balance(&address, &token).await?),
        Commands::Tokens => print_json(&client.list_tokens().await?),
        Commands::Token { contract } => print_json(&client.get_token_info(&contract).await?),
        Commands::TokenBalance { contract, wallet } => {
            print_json(&client.get_token_balance(&contract, &wallet).await?)
        },
        Commands::Tx { hash } => print_json(&client.get_detailed_transaction(&hash).await?),
        Commands::Receipt { hash } => print_json(&client.get_transaction_receipt(&hash).await?),
        Commands::Pending => print_json(&client.list_pending_transactions().await?),
        Commands::Wallet { address } => print_json(&client.get_wallet(&address).await?),
        Commands::Health => print_json(&client.health().await?),
        Commands::InitConfig { .. } => Ok(()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), anyhow::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
