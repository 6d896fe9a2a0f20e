//! Transaction assembly for the escrow program's offer instructions.

use solana_sdk::hash::Hash;
use solana_sdk::message::VersionedMessage;
use solana_sdk::pubkey::Pubkey;
use swapr_core::message::compile_message;
use swapr_core::{
    EscrowProgram, MakeOfferIntent, MintStandards, TakeOfferIntent, TransactionIntent,
};
use tracing::{debug, info, instrument, warn};

use crate::network::AccountLookup;
use crate::resolver::StandardResolver;

/// An unsigned, compiled offer transaction and what went into it.
#[derive(Debug, Clone)]
pub struct AssembledTransaction {
    pub message: VersionedMessage,
    /// Offer account the instruction operates on.
    pub offer: Pubkey,
    pub standards: MintStandards,
}

/// Builds offer transactions on behalf of a single signer.
///
/// For `make_offer` the signer is the maker, for `take_offer` the taker. The
/// assembler only derives, encodes and compiles; it never signs or submits.
pub struct OfferAssembler<L> {
    program: EscrowProgram,
    signer: Pubkey,
    resolver: StandardResolver<L>,
}

impl<L: AccountLookup> OfferAssembler<L> {
    pub fn new(program: EscrowProgram, signer: Pubkey, lookup: L) -> Self {
        Self {
            resolver: StandardResolver::new(program.token_programs, lookup),
            program,
            signer,
        }
    }

    pub fn signer(&self) -> &Pubkey {
        &self.signer
    }

    pub fn program(&self) -> &EscrowProgram {
        &self.program
    }

    /// Compiles a `make_offer` transaction with the bound signer as maker.
    #[instrument(skip(self, intent, recent_blockhash), fields(
        maker = %self.signer,
        offer_id = intent.offer_id,
        mint_a = %intent.mint_a,
        mint_b = %intent.mint_b
    ))]
    pub async fn build_make_offer(
        &self,
        intent: &MakeOfferIntent,
        recent_blockhash: Hash,
    ) -> swapr_core::Result<AssembledTransaction> {
        let offer = self.program.offer_address(&self.signer, intent.offer_id);
        info!(offer = %offer, "Derived offer address");

        let standards = self
            .resolver
            .resolve_pair(&intent.mint_a, &intent.mint_b)
            .await?;
        warn_if_mixed(standards);

        let accounts = self
            .program
            .make_offer_accounts(&self.signer, intent, standards);
        debug!(
            vault = %accounts.vault,
            maker_token_account_a = %accounts.maker_token_account_a,
            maker_token_account_b = %accounts.maker_token_account_b,
            token_program = %accounts.token_program,
            "Derived make_offer accounts"
        );

        let ix = self.program.make_offer(&accounts, intent);
        debug!("MakeOffer instruction built");

        let message = compile_message(&self.signer, &[ix], recent_blockhash)?;
        Ok(AssembledTransaction {
            message,
            offer,
            standards,
        })
    }

    /// Compiles a `take_offer` transaction with the bound signer as taker.
    #[instrument(skip(self, intent, recent_blockhash), fields(
        taker = %self.signer,
        maker = %intent.maker,
        offer = %intent.offer
    ))]
    pub async fn build_take_offer(
        &self,
        intent: &TakeOfferIntent,
        recent_blockhash: Hash,
    ) -> swapr_core::Result<AssembledTransaction> {
        let standards = self
            .resolver
            .resolve_pair(&intent.mint_a, &intent.mint_b)
            .await?;
        warn_if_mixed(standards);

        let accounts = self
            .program
            .take_offer_accounts(&self.signer, intent, standards);
        debug!(
            vault = %accounts.vault,
            taker_token_account_a = %accounts.taker_token_account_a,
            taker_token_account_b = %accounts.taker_token_account_b,
            maker_token_account_b = %accounts.maker_token_account_b,
            token_program = %accounts.token_program,
            "Derived take_offer accounts"
        );

        let ix = self.program.take_offer(&accounts);
        debug!("TakeOffer instruction built");

        let message = compile_message(&self.signer, &[ix], recent_blockhash)?;
        Ok(AssembledTransaction {
            message,
            offer: intent.offer,
            standards,
        })
    }

    pub async fn assemble(
        &self,
        intent: &TransactionIntent,
        recent_blockhash: Hash,
    ) -> swapr_core::Result<AssembledTransaction> {
        match intent {
            TransactionIntent::MakeOffer(i) => self.build_make_offer(i, recent_blockhash).await,
            TransactionIntent::TakeOffer(i) => self.build_take_offer(i, recent_blockhash).await,
        }
    }
}

/// The schema carries one token program, taken from mint A.
fn warn_if_mixed(standards: MintStandards) {
    if standards.is_mixed() {
        warn!(
            mint_a = %standards.mint_a,
            mint_b = %standards.mint_b,
            "Mints use different token programs; only mint A's is passed to the program"
        );
    }
}
