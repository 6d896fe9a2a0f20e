//! Account-set assembly for the escrow program.

use anchor_lang::system_program;
use anchor_lang::{InstructionData, ToAccountMetas};
use serde::{Deserialize, Serialize};
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;

use crate::derive::{derive_associated_address, derive_offer_address};
use crate::instruction::{MakeOffer, MakeOfferAccounts, TakeOffer, TakeOfferAccounts};
use crate::intent::{MakeOfferIntent, TakeOfferIntent};
use crate::standard::{TokenPrograms, TokenStandard};

/// Resolved token standards of the two mints of an offer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintStandards {
    pub mint_a: TokenStandard,
    pub mint_b: TokenStandard,
}

impl MintStandards {
    pub fn new(mint_a: TokenStandard, mint_b: TokenStandard) -> Self {
        Self { mint_a, mint_b }
    }

    /// Whether the two mints live under different token programs.
    pub fn is_mixed(&self) -> bool {
        self.mint_a != self.mint_b
    }
}

/// The on-chain escrow program together with the token programs it works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowProgram {
    #[serde(with = "crate::pubkey_serde")]
    pub program_id: Pubkey,
    #[serde(default)]
    pub token_programs: TokenPrograms,
}

impl EscrowProgram {
    pub fn new(program_id: Pubkey, token_programs: TokenPrograms) -> Self {
        Self {
            program_id,
            token_programs,
        }
    }

    /// Offer account of `(maker, offer_id)` under this program.
    pub fn offer_address(&self, maker: &Pubkey, offer_id: u64) -> Pubkey {
        derive_offer_address(&self.program_id, maker, offer_id)
    }

    /// Associated holding account of `owner` for `mint` under `standard`.
    pub fn associated_address(
        &self,
        mint: &Pubkey,
        owner: &Pubkey,
        standard: TokenStandard,
    ) -> Pubkey {
        derive_associated_address(&self.token_programs, mint, owner, standard)
    }

    /// Accounts for `make_offer` by `maker`.
    ///
    /// The schema carries a single token program, taken from mint A. Offers whose
    /// mint B lives under the other standard rely on the program tolerating that.
    pub fn make_offer_accounts(
        &self,
        maker: &Pubkey,
        intent: &MakeOfferIntent,
        standards: MintStandards,
    ) -> MakeOfferAccounts {
        let offer = self.offer_address(maker, intent.offer_id);

        MakeOfferAccounts {
            maker: *maker,
            token_mint_a: intent.mint_a,
            maker_token_account_a: self.associated_address(&intent.mint_a, maker, standards.mint_a),
            token_mint_b: intent.mint_b,
            maker_token_account_b: self.associated_address(&intent.mint_b, maker, standards.mint_b),
            vault: self.associated_address(&intent.mint_a, &offer, standards.mint_a),
            offer,
            token_program: self.token_programs.program_id(standards.mint_a),
            associated_token_program: self.token_programs.associated,
            system_program: system_program::ID,
        }
    }

    /// Accounts for `take_offer` signed by `taker`.
    pub fn take_offer_accounts(
        &self,
        taker: &Pubkey,
        intent: &TakeOfferIntent,
        standards: MintStandards,
    ) -> TakeOfferAccounts {
        TakeOfferAccounts {
            maker: intent.maker,
            offer: intent.offer,
            taker: *taker,
            taker_token_account_a: self.associated_address(&intent.mint_a, taker, standards.mint_a),
            taker_token_account_b: self.associated_address(&intent.mint_b, taker, standards.mint_b),
            vault: self.associated_address(&intent.mint_a, &intent.offer, standards.mint_a),
            maker_token_account_b: self.associated_address(
                &intent.mint_b,
                &intent.maker,
                standards.mint_b,
            ),
            token_program: self.token_programs.program_id(standards.mint_a),
            associated_token_program: self.token_programs.associated,
            system_program: system_program::ID,
        }
    }

    /// `make_offer` instruction over already derived `accounts`.
    pub fn make_offer(&self, accounts: &MakeOfferAccounts, intent: &MakeOfferIntent) -> Instruction {
        Instruction {
            program_id: self.program_id,
            accounts: accounts.to_account_metas(None),
            data: InstructionData::data(&MakeOffer {
                id: intent.offer_id,
                token_a_offered_amount: intent.amount_a,
                token_b_wanted_amount: intent.amount_b,
            }),
        }
    }

    /// `take_offer` instruction over already derived `accounts`.
    pub fn take_offer(&self, accounts: &TakeOfferAccounts) -> Instruction {
        Instruction {
            program_id: self.program_id,
            accounts: accounts.to_account_metas(None),
            data: InstructionData::data(&TakeOffer {}),
        }
    }
}
