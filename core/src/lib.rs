/// Human-readable amounts to base units and back
pub mod amount;
/// Offer and associated-account address derivation
pub mod derive;
pub mod error;
/// Instruction schemas and payload codecs of the escrow program
pub mod instruction;
/// Maker and taker intents
pub mod intent;
/// Compilation into versioned transaction messages
pub mod message;
/// Account-set assembly against a configured escrow program
pub mod program;
mod serde_utils;
/// Token standards and their program identities
pub mod standard;

pub use derive::{derive_associated_address, derive_offer_address, find_offer_address};
pub use error::{AmountError, ClassificationError, CompilationError, CoreError, PayloadError};
pub use intent::{MakeOfferIntent, TakeOfferIntent, TransactionIntent};
pub use program::{EscrowProgram, MintStandards};
pub use serde_utils::pubkey_serde;
pub use standard::{TokenPrograms, TokenStandard};

pub type Result<T> = std::result::Result<T, CoreError>;
