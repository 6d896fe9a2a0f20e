use std::str::FromStr;

use anchor_lang::system_program;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use swapr_core::instruction::{MakeOffer, TakeOffer};
use swapr_core::message::{compile_message, instruction_accounts, instruction_data};
use swapr_core::{
    derive_associated_address, EscrowProgram, MakeOfferIntent, MintStandards, TakeOfferIntent,
    TokenPrograms, TokenStandard,
};

const PROGRAM_ID: Pubkey = Pubkey::new_from_array([0xE5; 32]);
const MAKER: Pubkey = Pubkey::new_from_array([0x11; 32]);
const MINT_X: Pubkey = Pubkey::new_from_array([0x22; 32]);
const MINT_Y: Pubkey = Pubkey::new_from_array([0x33; 32]);
const OFFER_ID: u64 = 0x0102030405060708;

fn key(s: &str) -> Pubkey {
    Pubkey::from_str(s).unwrap()
}

fn program() -> EscrowProgram {
    EscrowProgram::new(PROGRAM_ID, TokenPrograms::default())
}

fn intent() -> MakeOfferIntent {
    MakeOfferIntent {
        offer_id: OFFER_ID,
        mint_a: MINT_X,
        mint_b: MINT_Y,
        amount_a: 100,
        amount_b: 50,
    }
}

#[test]
fn legacy_for_extended_offer() {
    let program = program();
    let programs = program.token_programs;
    let standards = MintStandards::new(TokenStandard::Legacy, TokenStandard::Extended);

    let accounts = program.make_offer_accounts(&MAKER, &intent(), standards);

    assert_eq!(
        accounts.offer,
        key("49gg7x1BvVo9rEvPLNJZSX4sXvrMeJ7LyyQAkLuZV3FD")
    );

    // vault and maker A under the legacy namespace
    assert_eq!(
        accounts.vault,
        derive_associated_address(&programs, &MINT_X, &accounts.offer, TokenStandard::Legacy)
    );
    assert_ne!(
        accounts.vault,
        derive_associated_address(&programs, &MINT_X, &accounts.offer, TokenStandard::Extended)
    );
    assert_eq!(
        accounts.vault,
        key("DsdD54FtFwdtwgZhRM3fcT14cegS8Me9MMnkzUXoJMnS")
    );
    assert_eq!(
        accounts.maker_token_account_a,
        key("9aiJHPARxbrgMgeMats2yTcSiBc4afhHCf1faikseJar")
    );

    // maker B under the extended namespace
    assert_eq!(
        accounts.maker_token_account_b,
        key("JADfKXE81srYBhMZH4oUxxeEqcwkEKQGXhUVQG5WUDjJ")
    );
    assert_ne!(
        accounts.maker_token_account_b,
        derive_associated_address(&programs, &MINT_Y, &MAKER, TokenStandard::Legacy)
    );

    // single token program reference follows mint A
    assert_eq!(accounts.token_program, programs.legacy);
}

#[test]
fn compiled_make_offer_message() {
    let program = program();
    let standards = MintStandards::new(TokenStandard::Legacy, TokenStandard::Extended);
    let blockhash = Hash::new_unique();

    let accounts = program.make_offer_accounts(&MAKER, &intent(), standards);
    let ix = program.make_offer(&accounts, &intent());
    let message = compile_message(&MAKER, &[ix], blockhash).unwrap();

    assert_eq!(message.instructions().len(), 1);
    assert_eq!(*message.recent_blockhash(), blockhash);
    assert_eq!(message.static_account_keys()[0], MAKER);

    assert_eq!(
        instruction_accounts(&message, 0).unwrap(),
        vec![
            MAKER,
            MINT_X,
            accounts.maker_token_account_a,
            MINT_Y,
            accounts.maker_token_account_b,
            accounts.vault,
            accounts.offer,
            TokenPrograms::default().legacy,
            TokenPrograms::default().associated,
            system_program::ID,
        ]
    );

    assert_eq!(
        system_program::ID,
        Pubkey::from_str("11111111111111111111111111111111").unwrap()
    );

    let decoded = MakeOffer::decode(instruction_data(&message, 0).unwrap()).unwrap();
    assert_eq!(
        decoded,
        MakeOffer {
            id: OFFER_ID,
            token_a_offered_amount: 100,
            token_b_wanted_amount: 50,
        }
    );
}

#[test]
fn compiled_take_offer_message() {
    let program = program();
    let standards = MintStandards::new(TokenStandard::Legacy, TokenStandard::Extended);
    let taker = Pubkey::new_unique();
    let offer = key("49gg7x1BvVo9rEvPLNJZSX4sXvrMeJ7LyyQAkLuZV3FD");

    let take = TakeOfferIntent {
        maker: MAKER,
        offer,
        mint_a: MINT_X,
        mint_b: MINT_Y,
    };
    let ix = program.take_offer(&program.take_offer_accounts(&taker, &take, standards));
    let message = compile_message(&taker, &[ix], Hash::new_unique()).unwrap();

    let keys = instruction_accounts(&message, 0).unwrap();
    assert_eq!(keys.len(), 10);
    assert_eq!(keys[0], MAKER);
    assert_eq!(keys[1], offer);
    assert_eq!(keys[2], taker);
    assert_eq!(keys[5], key("DsdD54FtFwdtwgZhRM3fcT14cegS8Me9MMnkzUXoJMnS"));
    assert_eq!(keys[6], key("JADfKXE81srYBhMZH4oUxxeEqcwkEKQGXhUVQG5WUDjJ"));
    assert_eq!(keys[7], TokenPrograms::default().legacy);

    assert_eq!(
        TakeOffer::decode(instruction_data(&message, 0).unwrap()).unwrap(),
        TakeOffer {}
    );
    assert_eq!(message.static_account_keys()[0], taker);
}
