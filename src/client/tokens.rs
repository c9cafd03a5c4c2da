use log::{debug, info};

use super::{NodeClient, api_path};
use crate::error::ClientError;
use crate::http::Operation;
use crate::http::types::{AccountBalances, SymbolEnvelope, TokensEnvelope};
use crate::log::mask_string;
use crate::models::{Amount, CreateTokenRequest, Token, TokenBalance, TokenTransfer, TransferTokenRequest};

const ZERO_BALANCE: &str = "0";

impl NodeClient {
    /// Balance of `address` in the token `symbol`, exactly as the node
    /// formats it.
    ///
    /// A symbol missing from the account's balance map yields `"0"`, not an
    /// error.
    pub async fn get_balance(&self, address: &str, symbol: &str) -> Result<String, ClientError> {
        debug!(address = &*mask_string(address), symbol = symbol; "HTTP: Requesting balance");
        let mut response: AccountBalances = self
            .transport
            .get(Operation::Balance, &api_path(&["accounts", address, "balance"]))
            .await?;
        Ok(response
            .balances
            .remove(symbol)
            .unwrap_or_else(|| ZERO_BALANCE.to_string()))
    }

    pub async fn list_tokens(&self) -> Result<Vec<Token>, ClientError> {
        let envelope: TokensEnvelope = self.transport.get(Operation::ListTokens, &api_path(&["tokens"])).await?;
        Ok(envelope.tokens)
    }

    /// Registers a new token and returns the symbol the node assigned.
    pub async fn create_token(
        &self,
        symbol: &str,
        name: &str,
        decimals: u8,
        initial_supply: &Amount,
        owner: &str,
    ) -> Result<String, ClientError> {
        info!(target: "audit", symbol = symbol, decimals = decimals; "HTTP: Creating token");
        let request = CreateTokenRequest {
            symbol: symbol.to_string(),
            name: name.to_string(),
            decimals,
            initial_supply: initial_supply.clone(),
            owner: owner.to_string(),
        };
        let envelope: SymbolEnvelope = self
            .transport
            .post(Operation::CreateToken, &api_path(&["tokens"]), &request)
            .await?;
        Ok(envelope.symbol)
    }

    /// Token definition behind a contract address. Requires a 200 response.
    pub async fn get_token_info(&self, contract: &str) -> Result<Token, ClientError> {
        debug!(contract = contract; "HTTP: Requesting token info");
        self.transport
            .get(Operation::TokenInfo, &api_path(&["tokens", contract]))
            .await
    }

    pub async fn get_token_balance(&self, contract: &str, wallet: &str) -> Result<TokenBalance, ClientError> {
        debug!(contract = contract, wallet = &*mask_string(wallet); "HTTP: Requesting token balance");
        let mut balance: TokenBalance = self
            .transport
            .get(Operation::TokenBalance, &api_path(&["tokens", contract, "balance", wallet]))
            .await?;
        if balance.contract.is_empty() {
            balance.contract = contract.to_string();
        }
        if balance.wallet.is_empty() {
            balance.wallet = wallet.to_string();
        }
        Ok(balance)
    }

    /// Transfers `amount` of the token at `contract`. The private key is sent
    /// to the node for signing and never logged. Requires a 200 response.
    pub async fn transfer_token(
        &self,
        from: &str,
        to: &str,
        contract: &str,
        amount: &Amount,
        private_key: &str,
    ) -> Result<TokenTransfer, ClientError> {
        info!(
            target: "audit",
            from = &*mask_string(from),
            to = &*mask_string(to),
            contract = contract;
            "HTTP: Transferring token"
        );
        let request = TransferTokenRequest {
            from: from.to_string(),
            to: to.to_string(),
            contract: contract.to_string(),
            amount: amount.clone(),
            private_key: private_key.to_string(),
        };
        let transfer: TokenTransfer = self
            .transport
            .post(Operation::TransferToken, &api_path(&["tokens", "transfer"]), &request)
            .await?;
        info!(target: "audit", hash = transfer.tx_hash.as_str(); "HTTP: Token transfer submitted");
        Ok(transfer)
    }
}
