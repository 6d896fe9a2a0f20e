use solana_client::client_error::{ClientError as RpcClientError, ClientErrorKind};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_request::RpcError;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::VersionedTransaction;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::network::{AccountLookup, CheckpointProvider, LookupError, TransactionSender};

/// JSON-RPC "invalid params", returned when the node cannot parse an address.
const INVALID_PARAMS: i64 = -32602;

/// Network capabilities backed by a remote Solana JSON-RPC node.
pub struct RpcGateway {
    client: RpcClient,
    commitment: CommitmentConfig,
}

impl RpcGateway {
    pub fn new(rpc_url: impl ToString, commitment: CommitmentConfig) -> Self {
        Self {
            client: RpcClient::new_with_commitment(rpc_url.to_string(), commitment),
            commitment,
        }
    }

    pub fn url(&self) -> String {
        self.client.url()
    }
}

#[async_trait::async_trait]
impl AccountLookup for RpcGateway {
    #[instrument(skip(self), fields(address = %address))]
    async fn account_owner(
        &self,
        address: &Pubkey,
    ) -> std::result::Result<Option<Pubkey>, LookupError> {
        let response = self
            .client
            .get_account_with_commitment(address, self.commitment)
            .await
            .map_err(lookup_error)?;

        let owner = response.value.map(|account| account.owner);
        debug!(slot = response.context.slot, owner = ?owner, "Fetched account owner");
        Ok(owner)
    }
}

#[async_trait::async_trait]
impl CheckpointProvider for RpcGateway {
    async fn latest_blockhash(&self) -> Result<Hash> {
        Ok(self.client.get_latest_blockhash().await?)
    }
}

#[async_trait::async_trait]
impl TransactionSender for RpcGateway {
    async fn send_and_confirm(&self, tx: &VersionedTransaction) -> Result<Signature> {
        Ok(self.client.send_and_confirm_transaction(tx).await?)
    }
}

fn lookup_error(err: RpcClientError) -> LookupError {
    match err.kind() {
        ClientErrorKind::RpcError(RpcError::RpcResponseError {
            code: INVALID_PARAMS,
            message,
            ..
        }) => LookupError::Malformed(message.clone()),
        _ => LookupError::Unavailable(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use solana_client::rpc_request::RpcResponseErrorData;

    use super::*;

    fn response_error(code: i64) -> RpcClientError {
        RpcClientError::from(ClientErrorKind::RpcError(RpcError::RpcResponseError {
            code,
            message: "Invalid param: WrongSize".to_string(),
            data: RpcResponseErrorData::Empty,
        }))
    }

    #[test]
    fn invalid_params_is_malformed() {
        assert_eq!(
            lookup_error(response_error(INVALID_PARAMS)),
            LookupError::Malformed("Invalid param: WrongSize".to_string())
        );
    }

    #[test]
    fn other_failures_are_unavailable() {
        assert!(matches!(
            lookup_error(response_error(-32005)),
            LookupError::Unavailable(_)
        ));
        let custom = RpcClientError::from(ClientErrorKind::Custom("connection refused".into()));
        assert!(matches!(lookup_error(custom), LookupError::Unavailable(_)));
    }
}
