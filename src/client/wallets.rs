use log::{debug, info};

use super::{NodeClient, api_path};
use crate::error::ClientError;
use crate::http::Operation;
use crate::log::mask_string;
use crate::models::{Amount, Wallet, WalletCreate};

impl NodeClient {
    /// Asks the node to generate a wallet. Requires a 201 response.
    ///
    /// The returned private key and mnemonic are not retained or logged by
    /// the client.
    pub async fn create_wallet(&self) -> Result<WalletCreate, ClientError> {
        let created: WalletCreate = self
            .transport
            .post(Operation::CreateWallet, &api_path(&["wallets"]), &serde_json::json!({}))
            .await?;
        info!(target: "audit", address = &*mask_string(&created.address); "HTTP: Wallet created");
        Ok(created)
    }

    /// Requires a 200 response.
    pub async fn get_wallet(&self, address: &str) -> Result<Wallet, ClientError> {
        debug!(address = &*mask_string(address); "HTTP: Requesting wallet");
        self.transport
            .get(Operation::GetWallet, &api_path(&["wallets", address]))
            .await
    }

    pub async fn get_wallet_balance(&self, address: &str) -> Result<Amount, ClientError> {
        Ok(self.get_wallet(address).await?.balance)
    }
}
