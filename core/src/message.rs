//! Compilation of instructions into unsigned, versioned transaction messages.

use core::str::FromStr;

use solana_sdk::hash::Hash;
use solana_sdk::instruction::Instruction;
use solana_sdk::message::{v0, VersionedMessage};
use solana_sdk::pubkey::Pubkey;

use crate::error::CompilationError;

/// Parses a base58 blockhash supplied by a caller.
pub fn parse_blockhash(s: &str) -> Result<Hash, CompilationError> {
    Hash::from_str(s.trim()).map_err(|e| CompilationError::MalformedBlockhash(format!("{s}: {e}")))
}

/// Compiles `instructions` into a v0 message paid for by `payer` and bound to
/// `recent_blockhash`. No address lookup tables are used.
pub fn compile_message(
    payer: &Pubkey,
    instructions: &[Instruction],
    recent_blockhash: Hash,
) -> Result<VersionedMessage, CompilationError> {
    let message = v0::Message::try_compile(payer, instructions, &[], recent_blockhash)?;
    Ok(VersionedMessage::V0(message))
}

/// Accounts of the `index`-th compiled instruction, in the order the program sees them.
pub fn instruction_accounts(message: &VersionedMessage, index: usize) -> Option<Vec<Pubkey>> {
    let keys = message.static_account_keys();
    let ix = message.instructions().get(index)?;
    ix.accounts
        .iter()
        .map(|i| keys.get(*i as usize).copied())
        .collect()
}

/// Data of the `index`-th compiled instruction.
pub fn instruction_data(message: &VersionedMessage, index: usize) -> Option<&[u8]> {
    message
        .instructions()
        .get(index)
        .map(|ix| ix.data.as_slice())
}
