//! Typed view of a classified address.

use serde::{Deserialize, Deserializer, Serialize};

use super::rules::{self, SNS_SUFFIXES};
use crate::chain::{AddressKind, ChainType};

/// Message returned for empty or missing input.
pub const ADDRESS_REQUIRED: &str = "Address parameter is required";

/// Why an input could not be classified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// Input was empty or absent.
    #[error("Address parameter is required")]
    Empty,

    /// Input matched none of the supported formats.
    #[error(
        "Invalid address format: expected an EVM address (0x followed by 40 hex characters), \
         a Solana address (32-44 base58 characters), an ENS name (.eth, .box) \
         or an SNS name ({suffixes})",
        suffixes = sns_suffix_list()
    )]
    Unrecognized(String),

    /// Input is a valid identifier but not of an accepted kind.
    #[error("Expected a raw EVM or Solana address, got {0}")]
    UnexpectedKind(AddressKind),

    /// Input classified as a different kind than the one it was tagged with.
    #[error("Address tagged as {expected} classifies as {found}")]
    KindMismatch {
        /// Kind carried by the tag.
        expected: AddressKind,
        /// Kind the classifier found.
        found: AddressKind,
    },
}

fn sns_suffix_list() -> String {
    SNS_SUFFIXES
        .iter()
        .map(|s| format!(".{s}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A syntactically valid address or name, holding its normalized form.
///
/// Deserialization re-runs the classifier on the value, so a tagged value
/// that does not classify as its tag is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ParsedAddress {
    /// Lowercased EVM address.
    Evm(String),
    /// Case-preserved Solana address.
    Solana(String),
    /// Lowercased ENS name.
    Ens(String),
    /// Lowercased SNS name.
    Sns(String),
}

impl ParsedAddress {
    /// Classify `input`, first match wins: EVM, Solana, ENS, SNS.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::Empty`] for an empty string and
    /// [`AddressError::Unrecognized`] when no format matches.
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        if input.is_empty() {
            return Err(AddressError::Empty);
        }

        if rules::is_evm_address(input) {
            Ok(Self::Evm(input.to_ascii_lowercase()))
        } else if rules::is_solana_address(input) {
            Ok(Self::Solana(input.to_string()))
        } else if rules::is_ens_name(input) {
            Ok(Self::Ens(input.to_ascii_lowercase()))
        } else if rules::is_sns_name(input) {
            Ok(Self::Sns(input.to_ascii_lowercase()))
        } else {
            Err(AddressError::Unrecognized(input.to_string()))
        }
    }

    /// Classify `input` and require it to be of `kind`.
    ///
    /// # Errors
    ///
    /// Returns the [`parse`](Self::parse) error, or
    /// [`AddressError::KindMismatch`] when `input` is another kind.
    pub fn parse_as(kind: AddressKind, input: &str) -> Result<Self, AddressError> {
        let parsed = Self::parse(input)?;
        if parsed.kind() == kind {
            Ok(parsed)
        } else {
            Err(AddressError::KindMismatch {
                expected: kind,
                found: parsed.kind(),
            })
        }
    }

    /// Kind tag for this address.
    #[must_use]
    pub const fn kind(&self) -> AddressKind {
        match self {
            Self::Evm(_) => AddressKind::Evm,
            Self::Solana(_) => AddressKind::Solana,
            Self::Ens(_) => AddressKind::Ens,
            Self::Sns(_) => AddressKind::Sns,
        }
    }

    /// Chain this address lives on or resolves to.
    #[must_use]
    pub const fn chain_type(&self) -> ChainType {
        self.kind().chain_type()
    }

    /// Normalized form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Evm(s) | Self::Solana(s) | Self::Ens(s) | Self::Sns(s) => s,
        }
    }

    /// Consumes the address, returning its normalized form.
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Evm(s) | Self::Solana(s) | Self::Ens(s) | Self::Sns(s) => s,
        }
    }

    /// Returns true for raw (ledger-addressable) addresses.
    #[must_use]
    pub const fn is_raw(&self) -> bool {
        matches!(self, Self::Evm(_) | Self::Solana(_))
    }
}

impl std::str::FromStr for ParsedAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for ParsedAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(tag = "kind", content = "value", rename_all = "lowercase")]
        enum Tagged {
            Evm(String),
            Solana(String),
            Ens(String),
            Sns(String),
        }

        let (kind, value) = match Tagged::deserialize(deserializer)? {
            Tagged::Evm(v) => (AddressKind::Evm, v),
            Tagged::Solana(v) => (AddressKind::Solana, v),
            Tagged::Ens(v) => (AddressKind::Ens, v),
            Tagged::Sns(v) => (AddressKind::Sns, v),
        };
        Self::parse_as(kind, &value).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
