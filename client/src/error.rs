use swapr_core::CoreError;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Receipt targets program {actual} but the config uses {expected}")]
    ConfigMismatch { expected: String, actual: String },
    #[error("Keypair error: {0}")]
    Keypair(String),
    #[error("Signing error: {0}")]
    Signing(#[from] solana_sdk::signer::SignerError),
    #[error("RPC client error: {0}")]
    SolanaRpcClient(#[from] solana_client::client_error::ClientError),
}
