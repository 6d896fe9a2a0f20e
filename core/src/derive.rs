//! Deterministic address derivation for offers and associated token accounts.
//!
//! Everything here is pure: the same inputs always give the same address, and
//! nothing touches the network.

use solana_sdk::pubkey::Pubkey;

use crate::standard::{TokenPrograms, TokenStandard};

/// Program-derived address seed prefix for offer accounts.
pub const OFFER_SEED: &[u8] = b"offer";

/// Derives the offer account address and its canonical bump.
///
/// Seeds are the prefix, the maker and the offer id in little-endian order.
pub fn find_offer_address(program_id: &Pubkey, maker: &Pubkey, offer_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[OFFER_SEED, maker.as_ref(), &offer_id.to_le_bytes()],
        program_id,
    )
}

/// Derives the offer account address owned by `program_id` for `(maker, offer_id)`.
pub fn derive_offer_address(program_id: &Pubkey, maker: &Pubkey, offer_id: u64) -> Pubkey {
    find_offer_address(program_id, maker, offer_id).0
}

/// Derives the associated holding account of `owner` for `mint` under `standard`.
///
/// The token program selected by `standard` is part of the seeds, so passing the
/// wrong standard yields a valid-looking address that nobody will ever fund.
/// `owner` may itself be a program-derived address (the offer owns its vault).
pub fn derive_associated_address(
    programs: &TokenPrograms,
    mint: &Pubkey,
    owner: &Pubkey,
    standard: TokenStandard,
) -> Pubkey {
    let token_program = programs.program_id(standard);
    Pubkey::find_program_address(
        &[owner.as_ref(), token_program.as_ref(), mint.as_ref()],
        &programs.associated,
    )
    .0
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    const PROGRAM: Pubkey = Pubkey::new_from_array([0xE5; 32]);
    const MAKER: Pubkey = Pubkey::new_from_array([0x11; 32]);

    #[test]
    fn offer_address_is_deterministic() {
        let a = derive_offer_address(&PROGRAM, &MAKER, 42);
        let b = derive_offer_address(&PROGRAM, &MAKER, 42);
        assert_eq!(a, b);

        // any input change moves the address
        assert_ne!(a, derive_offer_address(&PROGRAM, &MAKER, 43));
        assert_ne!(a, derive_offer_address(&PROGRAM, &Pubkey::new_unique(), 42));
        assert_ne!(a, derive_offer_address(&Pubkey::new_unique(), &MAKER, 42));
    }

    #[test]
    fn offer_address_known_answer() {
        let (offer, bump) = find_offer_address(&PROGRAM, &MAKER, 0x0102030405060708);
        assert_eq!(
            offer,
            Pubkey::from_str("49gg7x1BvVo9rEvPLNJZSX4sXvrMeJ7LyyQAkLuZV3FD").unwrap()
        );
        assert_eq!(bump, 254);
        assert!(!offer.is_on_curve());
    }

    #[test]
    fn offer_id_is_little_endian() {
        let (expected, _) = Pubkey::find_program_address(
            &[b"offer", MAKER.as_ref(), &[8u8, 7, 6, 5, 4, 3, 2, 1]],
            &PROGRAM,
        );
        assert_eq!(derive_offer_address(&PROGRAM, &MAKER, 0x0102030405060708), expected);

        let (big_endian, _) = Pubkey::find_program_address(
            &[b"offer", MAKER.as_ref(), &[1u8, 2, 3, 4, 5, 6, 7, 8]],
            &PROGRAM,
        );
        assert_ne!(expected, big_endian);
    }

    #[test]
    fn associated_address_depends_on_standard() {
        let programs = TokenPrograms::default();
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();

        let legacy = derive_associated_address(&programs, &mint, &owner, TokenStandard::Legacy);
        let extended =
            derive_associated_address(&programs, &mint, &owner, TokenStandard::Extended);
        assert_ne!(legacy, extended);

        // repeatable
        assert_eq!(
            legacy,
            derive_associated_address(&programs, &mint, &owner, TokenStandard::Legacy)
        );
    }

    #[test]
    fn associated_address_known_answer() {
        let programs = TokenPrograms::default();
        let mint_x = Pubkey::new_from_array([0x22; 32]);
        let mint_y = Pubkey::new_from_array([0x33; 32]);

        assert_eq!(
            derive_associated_address(&programs, &mint_x, &MAKER, TokenStandard::Legacy),
            Pubkey::from_str("9aiJHPARxbrgMgeMats2yTcSiBc4afhHCf1faikseJar").unwrap()
        );
        assert_eq!(
            derive_associated_address(&programs, &mint_y, &MAKER, TokenStandard::Extended),
            Pubkey::from_str("JADfKXE81srYBhMZH4oUxxeEqcwkEKQGXhUVQG5WUDjJ").unwrap()
        );
        assert_eq!(
            derive_associated_address(&programs, &mint_y, &MAKER, TokenStandard::Legacy),
            Pubkey::from_str("Dpzu69ZhqZ2ZV3qXptcBVfVn3z1rrsKLDxZBwzcVLpbj").unwrap()
        );
    }

    #[test]
    fn vault_owned_by_offer() {
        let programs = TokenPrograms::default();
        let mint_x = Pubkey::new_from_array([0x22; 32]);
        let offer = derive_offer_address(&PROGRAM, &MAKER, 0x0102030405060708);

        assert_eq!(
            derive_associated_address(&programs, &mint_x, &offer, TokenStandard::Legacy),
            Pubkey::from_str("DsdD54FtFwdtwgZhRM3fcT14cegS8Me9MMnkzUXoJMnS").unwrap()
        );
    }

    #[test]
    fn associated_namespace_is_injected() {
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let default = TokenPrograms::default();
        let custom = TokenPrograms {
            associated: Pubkey::new_unique(),
            ..default
        };

        assert_ne!(
            derive_associated_address(&default, &mint, &owner, TokenStandard::Legacy),
            derive_associated_address(&custom, &mint, &owner, TokenStandard::Legacy)
        );
    }
}
