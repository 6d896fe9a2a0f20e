//! Network capabilities the transaction builder depends on.
//!
//! The assembler never talks to a node directly; it is handed implementations
//! of these traits. [`crate::rpc::RpcGateway`] backs all of them with a
//! JSON-RPC node, tests back them with in-memory fakes.

use std::sync::Arc;

use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::VersionedTransaction;

use crate::error::Result;

/// Why an account lookup did not produce an answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The node rejected the address itself.
    #[error("malformed address: {0}")]
    Malformed(String),
    /// The node could not be reached or did not answer usefully.
    #[error("lookup unavailable: {0}")]
    Unavailable(String),
}

/// Reads the owning program of on-chain accounts.
#[async_trait::async_trait]
pub trait AccountLookup: Send + Sync {
    /// Owning program of `address`, or `None` when no such account exists.
    async fn account_owner(
        &self,
        address: &Pubkey,
    ) -> std::result::Result<Option<Pubkey>, LookupError>;
}

/// Supplies the recent blockhash a transaction is bound to.
#[async_trait::async_trait]
pub trait CheckpointProvider: Send + Sync {
    async fn latest_blockhash(&self) -> Result<Hash>;
}

/// Submits signed transactions and waits for confirmation.
#[async_trait::async_trait]
pub trait TransactionSender: Send + Sync {
    async fn send_and_confirm(&self, tx: &VersionedTransaction) -> Result<Signature>;
}

#[async_trait::async_trait]
impl<T: AccountLookup + ?Sized> AccountLookup for Arc<T> {
    async fn account_owner(
        &self,
        address: &Pubkey,
    ) -> std::result::Result<Option<Pubkey>, LookupError> {
        (**self).account_owner(address).await
    }
}

#[async_trait::async_trait]
impl<T: CheckpointProvider + ?Sized> CheckpointProvider for Arc<T> {
    async fn latest_blockhash(&self) -> Result<Hash> {
        (**self).latest_blockhash().await
    }
}

#[async_trait::async_trait]
impl<T: TransactionSender + ?Sized> TransactionSender for Arc<T> {
    async fn send_and_confirm(&self, tx: &VersionedTransaction) -> Result<Signature> {
        (**self).send_and_confirm(tx).await
    }
}
