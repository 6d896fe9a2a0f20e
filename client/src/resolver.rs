//! Mint-standard resolution against on-chain account metadata.

use solana_sdk::pubkey::Pubkey;
use swapr_core::{ClassificationError, MintStandards, TokenPrograms, TokenStandard};
use tracing::{debug, instrument, warn};

use crate::network::{AccountLookup, LookupError};

/// Classifies mints by the program that owns their account.
pub struct StandardResolver<L> {
    programs: TokenPrograms,
    lookup: L,
}

impl<L: AccountLookup> StandardResolver<L> {
    pub fn new(programs: TokenPrograms, lookup: L) -> Self {
        Self { programs, lookup }
    }

    /// Token standard governing `mint`.
    ///
    /// A missing account is classified as legacy, and so is a lookup that could
    /// not complete. Only an address the node rejects as malformed is an error.
    #[instrument(skip(self), fields(mint = %mint))]
    pub async fn resolve_standard(
        &self,
        mint: &Pubkey,
    ) -> Result<TokenStandard, ClassificationError> {
        let standard = match self.lookup.account_owner(mint).await {
            Ok(Some(owner)) => self.programs.classify(Some(&owner)),
            Ok(None) => {
                debug!("Mint account not found, assuming legacy");
                TokenStandard::Legacy
            }
            Err(LookupError::Unavailable(reason)) => {
                warn!(%reason, "Mint lookup failed, assuming legacy");
                TokenStandard::Legacy
            }
            Err(LookupError::Malformed(reason)) => {
                return Err(ClassificationError::MalformedLookup {
                    mint: mint.to_string(),
                    reason,
                });
            }
        };
        debug!(%standard, "Resolved token standard");
        Ok(standard)
    }

    /// Resolves both mints of an offer concurrently.
    ///
    /// Both lookups always run to completion; dropping the returned future
    /// cancels them together.
    pub async fn resolve_pair(
        &self,
        mint_a: &Pubkey,
        mint_b: &Pubkey,
    ) -> Result<MintStandards, ClassificationError> {
        let (a, b) = tokio::join!(self.resolve_standard(mint_a), self.resolve_standard(mint_b));
        Ok(MintStandards::new(a?, b?))
    }
}
