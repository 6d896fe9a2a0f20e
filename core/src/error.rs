use solana_sdk::message::CompileError;
use thiserror::Error;

/// Top-level errors of the core library.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("classification error: {0}")]
    Classification(#[from] ClassificationError),

    #[error("compilation error: {0}")]
    Compilation(#[from] CompilationError),

    #[error("amount error: {0}")]
    Amount(#[from] AmountError),

    #[error("payload error: {0}")]
    Payload(#[from] PayloadError),
}

/// Errors raised while determining which token standard governs a mint.
///
/// Only malformed input lands here. An account that does not exist, or a lookup
/// that could not be completed, degrades to the legacy standard instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassificationError {
    /// Mint string is not a base58-encoded 32-byte address.
    #[error("malformed mint address: {0}")]
    MalformedAddress(String),

    /// The lookup collaborator rejected the mint address as malformed.
    #[error("lookup rejected mint {mint}: {reason}")]
    MalformedLookup { mint: String, reason: String },
}

/// Errors raised while binding an instruction into a transaction message.
#[derive(Debug, Error)]
pub enum CompilationError {
    #[error("malformed signer identity: {0}")]
    MalformedSigner(String),

    #[error("malformed blockhash: {0}")]
    MalformedBlockhash(String),

    #[error("message compilation failed: {0}")]
    Compile(#[from] CompileError),
}

/// Errors when scaling human-readable amounts into base units.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("invalid amount: {0:?}")]
    Invalid(String),

    #[error("too many fractional digits in {amount:?} for {decimals} decimals")]
    Precision { amount: String, decimals: u8 },

    #[error("amount {amount:?} overflows u64 at {decimals} decimals")]
    Overflow { amount: String, decimals: u8 },
}

/// Errors when decoding an encoded instruction payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("payload too short: {0} bytes")]
    Truncated(usize),

    #[error("unexpected discriminator: {0:?}")]
    Discriminator(Vec<u8>),

    #[error("invalid arguments: {0}")]
    Arguments(String),
}
