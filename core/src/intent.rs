//! High-level swap intents, consumed immediately by the transaction assembler.

use core::str::FromStr;

use rand::rngs::OsRng;
use rand::RngCore;
use solana_sdk::pubkey::Pubkey;

use crate::error::{ClassificationError, CompilationError};

/// Draws a fresh offer id from the operating system's CSPRNG.
///
/// Uniqueness per maker is probabilistic; existing offers are not consulted.
pub fn new_offer_id() -> u64 {
    OsRng.next_u64()
}

/// Parses a mint address supplied by a caller.
pub fn parse_mint(s: &str) -> Result<Pubkey, ClassificationError> {
    Pubkey::from_str(s.trim()).map_err(|_| ClassificationError::MalformedAddress(s.to_string()))
}

/// Parses a signer or counterparty identity supplied by a caller.
pub fn parse_identity(s: &str) -> Result<Pubkey, CompilationError> {
    Pubkey::from_str(s.trim()).map_err(|_| CompilationError::MalformedSigner(s.to_string()))
}

/// Maker side: lock `amount_a` of `mint_a` in exchange for `amount_b` of `mint_b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MakeOfferIntent {
    pub offer_id: u64,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    /// Offered amount of mint A, in base units.
    pub amount_a: u64,
    /// Requested amount of mint B, in base units.
    pub amount_b: u64,
}

impl MakeOfferIntent {
    /// Builds an intent with a freshly drawn offer id.
    pub fn new(mint_a: Pubkey, mint_b: Pubkey, amount_a: u64, amount_b: u64) -> Self {
        Self {
            offer_id: new_offer_id(),
            mint_a,
            mint_b,
            amount_a,
            amount_b,
        }
    }

    /// Builds an intent from caller-supplied mint strings.
    pub fn parse(
        offer_id: u64,
        mint_a: &str,
        mint_b: &str,
        amount_a: u64,
        amount_b: u64,
    ) -> Result<Self, ClassificationError> {
        Ok(Self {
            offer_id,
            mint_a: parse_mint(mint_a)?,
            mint_b: parse_mint(mint_b)?,
            amount_a,
            amount_b,
        })
    }
}

/// Taker side: accept the offer at `offer` created by `maker`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakeOfferIntent {
    pub maker: Pubkey,
    pub offer: Pubkey,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
}

impl TakeOfferIntent {
    /// Builds an intent from caller-supplied strings.
    pub fn parse(
        maker: &str,
        offer: &str,
        mint_a: &str,
        mint_b: &str,
    ) -> crate::Result<Self> {
        Ok(Self {
            maker: parse_identity(maker)?,
            offer: parse_identity(offer)?,
            mint_a: parse_mint(mint_a)?,
            mint_b: parse_mint(mint_b)?,
        })
    }
}

/// One escrow action to be turned into a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionIntent {
    MakeOffer(MakeOfferIntent),
    TakeOffer(TakeOfferIntent),
}

impl From<MakeOfferIntent> for TransactionIntent {
    fn from(value: MakeOfferIntent) -> Self {
        Self::MakeOffer(value)
    }
}

impl From<TakeOfferIntent> for TransactionIntent {
    fn from(value: TakeOfferIntent) -> Self {
        Self::TakeOffer(value)
    }
}
