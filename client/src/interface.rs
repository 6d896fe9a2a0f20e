use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anchor_client::Cluster;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use swapr_core::{pubkey_serde, EscrowProgram, MintStandards, TakeOfferIntent, TokenPrograms};

use crate::error::{ClientError, Result};

pub fn load_json<P, T>(path: P) -> anyhow::Result<T>
where
    P: AsRef<Path>,
    T: DeserializeOwned,
{
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            anyhow::bail!(
                "Input file {:?} not found. \
                 Create it first or pass --config/--receipt explicitly.",
                path
            );
        }
        Err(e) => return Err(e).context(format!("opening file {:?}", path)),
    };
    serde_json::from_reader(file).with_context(|| format!("parsing JSON from {:?}", path))
}

pub fn save_json<P, T>(path: P, data: &T) -> anyhow::Result<()>
where
    P: AsRef<Path>,
    T: Serialize,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {:?}", parent))?;
    }

    let file = File::create(path).with_context(|| format!("creating file {:?}", path))?;
    serde_json::to_writer_pretty(file, data)
        .with_context(|| format!("serializing to JSON to {:?}", path))
}

/// Confirmation level for reads and submissions.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl From<Commitment> for CommitmentConfig {
    fn from(value: Commitment) -> Self {
        match value {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

/// Network and program configuration of the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// JSON-RPC endpoint URL or cluster moniker (`devnet`, `localnet`, ...)
    pub rpc_url: String,
    /// Path to the signer keypair file
    pub keypair_path: PathBuf,
    /// Escrow program ID
    #[serde(with = "pubkey_serde")]
    pub program_id: Pubkey,
    #[serde(default)]
    pub commitment: Commitment,
    /// Token program identities, defaulting to the well-known ones
    #[serde(default)]
    pub token_programs: TokenPrograms,
}

impl ClientConfig {
    pub fn escrow_program(&self) -> EscrowProgram {
        EscrowProgram::new(self.program_id, self.token_programs)
    }

    /// Resolves `rpc_url` into an endpoint URL, expanding cluster monikers.
    pub fn endpoint(&self) -> Result<String> {
        let cluster = Cluster::from_str(&self.rpc_url)
            .map_err(|e| ClientError::Config(format!("rpc_url {:?}: {e}", self.rpc_url)))?;
        Ok(cluster.url().to_string())
    }
}

/// Record of a created offer, sufficient for a counterparty to take it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferReceipt {
    #[serde(with = "pubkey_serde")]
    pub program_id: Pubkey,
    pub offer_id: u64,
    #[serde(with = "pubkey_serde")]
    pub offer: Pubkey,
    #[serde(with = "pubkey_serde")]
    pub maker: Pubkey,
    #[serde(with = "pubkey_serde")]
    pub mint_a: Pubkey,
    #[serde(with = "pubkey_serde")]
    pub mint_b: Pubkey,
    /// Offered amount of mint A, in base units
    pub amount_a: u64,
    /// Requested amount of mint B, in base units
    pub amount_b: u64,
    pub standards: MintStandards,
    /// Transaction signature, absent for dry runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl OfferReceipt {
    /// Fails unless the receipt was issued for `config`'s escrow program.
    pub fn check_program(&self, config: &ClientConfig) -> Result<()> {
        if self.program_id != config.program_id {
            return Err(ClientError::ConfigMismatch {
                expected: config.program_id.to_string(),
                actual: self.program_id.to_string(),
            });
        }
        Ok(())
    }

    pub fn take_intent(&self) -> TakeOfferIntent {
        TakeOfferIntent {
            maker: self.maker,
            offer: self.offer,
            mint_a: self.mint_a,
            mint_b: self.mint_b,
        }
    }
}
