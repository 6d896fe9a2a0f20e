use std::path::Path;

use solana_sdk::message::VersionedMessage;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{read_keypair_file, Keypair, Signature};
use solana_sdk::signer::Signer;
use solana_sdk::transaction::VersionedTransaction;
use tracing::{debug, info, instrument};

use crate::error::{ClientError, Result};
use crate::network::TransactionSender;

/// Signs compiled messages with a local keypair and submits them.
pub struct Broadcaster {
    keypair: Keypair,
}

impl Broadcaster {
    pub fn new(keypair: Keypair) -> Self {
        Self { keypair }
    }

    /// Loads the signing keypair from a JSON keypair file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let keypair = read_keypair_file(path)
            .map_err(|e| ClientError::Keypair(format!("{}: {e}", path.display())))?;
        debug!(signer = %keypair.pubkey(), "Loaded signer keypair");
        Ok(Self { keypair })
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Signs `message`. Fails if the keypair is not a required signer of it.
    pub fn sign(&self, message: VersionedMessage) -> Result<VersionedTransaction> {
        Ok(VersionedTransaction::try_new(message, &[&self.keypair])?)
    }

    #[instrument(skip_all, fields(signer = %self.keypair.pubkey()))]
    pub async fn submit<S>(&self, sender: &S, message: VersionedMessage) -> Result<Signature>
    where
        S: TransactionSender + ?Sized,
    {
        let tx = self.sign(message)?;
        debug!("Signed transaction");

        let signature = sender.send_and_confirm(&tx).await?;
        info!(%signature, "Transaction confirmed");
        Ok(signature)
    }
}
