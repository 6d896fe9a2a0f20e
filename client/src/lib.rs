use std::sync::Arc;

use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use swapr_core::{EscrowProgram, TransactionIntent};
use tracing::info;

pub use assembler::{AssembledTransaction, OfferAssembler};
pub use broadcast::Broadcaster;
use error::Result;
pub use network::{AccountLookup, CheckpointProvider, LookupError, TransactionSender};
pub use resolver::StandardResolver;
pub use rpc::RpcGateway;

use crate::interface::ClientConfig;

pub mod assembler;
pub mod broadcast;
pub mod error;
pub mod interface;
pub mod network;
pub mod resolver;
pub mod rpc;

/// Escrow client: assembles offer transactions, then signs and submits them.
pub struct OfferClient<N> {
    network: Arc<N>,
    assembler: OfferAssembler<Arc<N>>,
    broadcaster: Broadcaster,
}

impl OfferClient<RpcGateway> {
    /// Connects to the configured node with the configured signer.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let endpoint = config.endpoint()?;
        let broadcaster = Broadcaster::from_file(&config.keypair_path)?;
        let network = RpcGateway::new(endpoint, config.commitment.into());
        info!(rpc_url = %network.url(), program_id = %config.program_id, "Using escrow program");
        Ok(Self::new(config.escrow_program(), network, broadcaster))
    }
}

impl<N> OfferClient<N>
where
    N: AccountLookup + CheckpointProvider + TransactionSender,
{
    pub fn new(program: EscrowProgram, network: N, broadcaster: Broadcaster) -> Self {
        let network = Arc::new(network);
        let assembler = OfferAssembler::new(program, broadcaster.pubkey(), network.clone());
        Self {
            network,
            assembler,
            broadcaster,
        }
    }

    /// Identity that signs, pays for, and acts in every transaction.
    pub fn signer(&self) -> Pubkey {
        self.broadcaster.pubkey()
    }

    pub fn program(&self) -> &EscrowProgram {
        self.assembler.program()
    }

    /// Compiles `intent` against a freshly fetched blockhash. Nothing is signed.
    pub async fn prepare(&self, intent: &TransactionIntent) -> Result<AssembledTransaction> {
        let recent_blockhash = self.network.latest_blockhash().await?;
        info!(blockhash = %recent_blockhash, "Fetched recent blockhash");
        self.prepare_at(intent, recent_blockhash).await
    }

    /// Compiles `intent` against a caller-supplied blockhash.
    pub async fn prepare_at(
        &self,
        intent: &TransactionIntent,
        recent_blockhash: Hash,
    ) -> Result<AssembledTransaction> {
        Ok(self.assembler.assemble(intent, recent_blockhash).await?)
    }

    /// Signs and submits a prepared transaction.
    pub async fn submit(&self, assembled: AssembledTransaction) -> Result<Signature> {
        self.broadcaster
            .submit(self.network.as_ref(), assembled.message)
            .await
    }

    pub async fn execute(
        &self,
        intent: &TransactionIntent,
    ) -> Result<(AssembledTransaction, Signature)> {
        let assembled = self.prepare(intent).await?;
        let signature = self.submit(assembled.clone()).await?;
        Ok((assembled, signature))
    }
}
