use std::fmt;

use ethers::{
    signers::{LocalWallet, Signer},
    types::Address,
    utils::hex,
};
use tracing::debug;

/// An ephemeral account. The key only ever lives in memory and is dropped
/// along with the account.
pub struct Account {
    wallet: LocalWallet,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

impl Account {
    /// Generates a totally random account using the thread-local CSPRNG.
    pub fn random() -> Self {
        let wallet = LocalWallet::new(&mut rand::thread_rng());
        debug!(address = ?wallet.address(), "generated agent account");
        Self { wallet }
    }

    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    /// The 0x-prefixed hex encoding of the private key.
    pub fn private_key_hex(&self) -> String {
        format!("0x{}", hex::encode(self.wallet.signer().to_bytes()))
    }
}
