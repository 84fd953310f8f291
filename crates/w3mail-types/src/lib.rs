//! # w3mail-types
//!
//! Shared data types for the w3mail Web3 email ecosystem.
//!
//! This crate provides:
//! - **Address classification** - EVM addresses, Solana addresses, ENS and SNS names
//! - Chain tags shared by every response shape
//! - Business entities (emails, wallets, mailboxes, on-chain messages)
//! - API envelopes for the indexer and the email server
//!
//! Nothing here performs I/O: services embed these types in their own
//! requests and responses.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod address;
pub mod api;
pub mod chain;
pub mod entities;
mod error;

pub use address::{
    AddressError, BasicValidationResult, ClassificationResult, MatchedFormats, ParsedAddress,
    classify_basic, classify_comprehensive, is_ens_name, is_evm_address, is_sns_name,
    is_solana_address,
};
pub use api::{ApiError, ApiErrorCode, ApiResponse, Paginated};
pub use chain::{AddressKind, ChainType};
pub use entities::{
    Email, EmailAddress, EmailStatus, Mailbox, MessageRecipient, OnchainMessage, Wallet,
    WalletAddress,
};
pub use error::{Error, Result};
