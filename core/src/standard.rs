//! Token standards and the program identities that implement them.

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// Well-known id of the original token program.
pub const LEGACY_TOKEN_PROGRAM_ID: Pubkey = solana_sdk::pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// Well-known id of the extended (token-2022) program.
pub const EXTENDED_TOKEN_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");

/// Well-known id of the associated token account program.
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

/// Which token program governs a mint and its holding accounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenStandard {
    /// Original token program. Most mints predate the extended standard.
    #[default]
    Legacy,
    /// Token-2022, a superset of the legacy program.
    Extended,
}

impl std::fmt::Display for TokenStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Extended => write!(f, "extended"),
        }
    }
}

/// Program identities used for classification and associated-address derivation.
///
/// Passed explicitly into the derivation and resolution steps so that alternate
/// deployments (local validators, forks, tests) can swap them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPrograms {
    /// Owner of legacy mints.
    #[serde(with = "crate::pubkey_serde")]
    pub legacy: Pubkey,
    /// Owner of extended mints.
    #[serde(with = "crate::pubkey_serde")]
    pub extended: Pubkey,
    /// Registrar namespace for associated holding accounts.
    #[serde(with = "crate::pubkey_serde")]
    pub associated: Pubkey,
}

impl Default for TokenPrograms {
    fn default() -> Self {
        Self {
            legacy: LEGACY_TOKEN_PROGRAM_ID,
            extended: EXTENDED_TOKEN_PROGRAM_ID,
            associated: ASSOCIATED_TOKEN_PROGRAM_ID,
        }
    }
}

impl TokenPrograms {
    /// Returns the program id implementing `standard`.
    pub fn program_id(&self, standard: TokenStandard) -> Pubkey {
        match standard {
            TokenStandard::Legacy => self.legacy,
            TokenStandard::Extended => self.extended,
        }
    }

    /// Classifies a mint by the program that owns its account.
    ///
    /// `None` means the account does not exist. Anything other than the extended
    /// program, including absence, is treated as legacy.
    pub fn classify(&self, owner: Option<&Pubkey>) -> TokenStandard {
        match owner {
            Some(owner) if *owner == self.extended => TokenStandard::Extended,
            _ => TokenStandard::Legacy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_owner() {
        let programs = TokenPrograms::default();

        assert_eq!(
            programs.classify(Some(&EXTENDED_TOKEN_PROGRAM_ID)),
            TokenStandard::Extended
        );
        assert_eq!(
            programs.classify(Some(&LEGACY_TOKEN_PROGRAM_ID)),
            TokenStandard::Legacy
        );
        // not found
        assert_eq!(programs.classify(None), TokenStandard::Legacy);
        // owned by some unrelated program
        assert_eq!(
            programs.classify(Some(&Pubkey::new_unique())),
            TokenStandard::Legacy
        );
    }

    #[test]
    fn injected_programs() {
        let custom = Pubkey::new_unique();
        let programs = TokenPrograms {
            extended: custom,
            ..TokenPrograms::default()
        };

        assert_eq!(programs.classify(Some(&custom)), TokenStandard::Extended);
        // the well-known id no longer counts once overridden
        assert_eq!(
            programs.classify(Some(&EXTENDED_TOKEN_PROGRAM_ID)),
            TokenStandard::Legacy
        );
        assert_eq!(programs.program_id(TokenStandard::Extended), custom);
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&TokenStandard::Extended).unwrap();
        assert_eq!(json, "\"extended\"");

        let programs = TokenPrograms::default();
        let json = serde_json::to_string(&programs).unwrap();
        assert!(json.contains("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb"));
        let back: TokenPrograms = serde_json::from_str(&json).unwrap();
        assert_eq!(back, programs);
    }
}
