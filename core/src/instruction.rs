//! Instruction schemas of the escrow program.
//!
//! The program decodes accounts positionally and arguments as Borsh after an
//! 8-byte Anchor discriminator, so field order here is part of the wire format.

use anchor_lang::prelude::{borsh, AccountMeta, AnchorDeserialize, AnchorSerialize};
use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};
use solana_sdk::pubkey::Pubkey;

use crate::error::PayloadError;

/// Anchor discriminator of the `make_offer` instruction.
pub const MAKE_OFFER_DISCRIMINATOR: [u8; 8] = [214, 98, 97, 35, 59, 12, 44, 178];

/// Anchor discriminator of the `take_offer` instruction.
pub const TAKE_OFFER_DISCRIMINATOR: [u8; 8] = [128, 156, 242, 207, 237, 192, 103, 240];

fn split_discriminator<'a>(data: &'a [u8], expected: &[u8]) -> Result<&'a [u8], PayloadError> {
    if data.len() < expected.len() {
        return Err(PayloadError::Truncated(data.len()));
    }
    let (head, rest) = data.split_at(expected.len());
    if head != expected {
        return Err(PayloadError::Discriminator(head.to_vec()));
    }
    Ok(rest)
}

/// Arguments of `make_offer`.
#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MakeOffer {
    /// Client-chosen offer nonce, also part of the offer address seeds.
    pub id: u64,
    /// Amount of mint A moved into the vault, in base units.
    pub token_a_offered_amount: u64,
    /// Amount of mint B the maker wants back, in base units.
    pub token_b_wanted_amount: u64,
}

impl Discriminator for MakeOffer {
    const DISCRIMINATOR: &'static [u8] = &MAKE_OFFER_DISCRIMINATOR;
}

impl InstructionData for MakeOffer {}

impl MakeOffer {
    /// Decodes an encoded `make_offer` payload.
    pub fn decode(data: &[u8]) -> Result<Self, PayloadError> {
        let args = split_discriminator(data, Self::DISCRIMINATOR)?;
        Self::try_from_slice(args).map_err(|e| PayloadError::Arguments(e.to_string()))
    }
}

/// Arguments of `take_offer`. Amounts are read from the offer account on-chain.
#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakeOffer {}

impl Discriminator for TakeOffer {
    const DISCRIMINATOR: &'static [u8] = &TAKE_OFFER_DISCRIMINATOR;
}

impl InstructionData for TakeOffer {}

impl TakeOffer {
    /// Decodes an encoded `take_offer` payload.
    pub fn decode(data: &[u8]) -> Result<Self, PayloadError> {
        let args = split_discriminator(data, Self::DISCRIMINATOR)?;
        if !args.is_empty() {
            return Err(PayloadError::Arguments(format!(
                "{} unexpected trailing bytes",
                args.len()
            )));
        }
        Ok(Self {})
    }
}

/// Accounts of `make_offer`, in program order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MakeOfferAccounts {
    pub maker: Pubkey,
    pub token_mint_a: Pubkey,
    pub maker_token_account_a: Pubkey,
    pub token_mint_b: Pubkey,
    pub maker_token_account_b: Pubkey,
    /// Holding account of mint A owned by the offer.
    pub vault: Pubkey,
    pub offer: Pubkey,
    /// Single token program reference, always the one governing mint A.
    pub token_program: Pubkey,
    pub associated_token_program: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for MakeOfferAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.maker, true),
            AccountMeta::new_readonly(self.token_mint_a, false),
            AccountMeta::new(self.maker_token_account_a, false),
            AccountMeta::new_readonly(self.token_mint_b, false),
            AccountMeta::new(self.maker_token_account_b, false),
            AccountMeta::new(self.vault, false),
            AccountMeta::new(self.offer, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.associated_token_program, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

/// Accounts of `take_offer`, in program order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakeOfferAccounts {
    /// Receives mint B and the rent of the closed offer.
    pub maker: Pubkey,
    pub offer: Pubkey,
    pub taker: Pubkey,
    pub taker_token_account_a: Pubkey,
    pub taker_token_account_b: Pubkey,
    pub vault: Pubkey,
    pub maker_token_account_b: Pubkey,
    pub token_program: Pubkey,
    pub associated_token_program: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for TakeOfferAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.maker, false),
            AccountMeta::new(self.offer, false),
            AccountMeta::new(self.taker, true),
            AccountMeta::new(self.taker_token_account_a, false),
            AccountMeta::new(self.taker_token_account_b, false),
            AccountMeta::new(self.vault, false),
            AccountMeta::new(self.maker_token_account_b, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.associated_token_program, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}
