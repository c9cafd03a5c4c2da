use serde::{Deserialize, Serialize};

use super::Amount;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub address: String,
    #[serde(default)]
    pub balance: Amount,
    #[serde(default)]
    pub nonce: u64,
    #[serde(default)]
    pub is_contract: bool,
}

/// A freshly created wallet.
///
/// The private key and mnemonic are only ever returned by the creation call.
/// Not `Serialize`; `Debug` omits both secrets.
#[derive(Clone, Deserialize)]
pub struct WalletCreate {
    pub address: String,
    pub private_key: String,
    #[serde(default)]
    pub mnemonic: String,
}

impl std::fmt::Debug for WalletCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletCreate")
            .field("address", &self.address)
            .field("private_key", &"<REDACTED>")
            .field("mnemonic", &"<REDACTED>")
            .finish()
    }
}
