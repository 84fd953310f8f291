//! Web3 address classification.
//!
//! Classifies arbitrary strings as EVM addresses, Solana addresses, ENS names
//! or SNS names and produces their canonical form. Classification is purely
//! syntactic: nothing is resolved or checked on chain.
//!
//! ```
//! use w3mail_types::address::{classify_comprehensive, classify_basic};
//! use w3mail_types::{AddressKind, ChainType};
//!
//! let result = classify_comprehensive("Vitalik.ETH");
//! assert!(result.is_valid);
//! assert_eq!(result.address_kind, AddressKind::Ens);
//! assert_eq!(result.normalized_form, "vitalik.eth");
//!
//! // Names are not ledger-addressable.
//! assert_eq!(classify_basic("vitalik.eth").chain_type, ChainType::Unknown);
//! ```

mod classify;
mod parsed;
pub mod rules;

pub use classify::{
    BasicValidationResult, ClassificationResult, MatchedFormats, addresses_equal, classify_basic,
    classify_comprehensive, normalize_address,
};
pub use parsed::{ADDRESS_REQUIRED, AddressError, ParsedAddress};
pub use rules::{is_ens_name, is_evm_address, is_sns_name, is_solana_address};
