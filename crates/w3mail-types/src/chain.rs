//! Chain and address-kind tags.

use serde::{Deserialize, Serialize};

/// Ledger family an address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChainType {
    /// Ethereum and other EVM-compatible chains.
    Evm,
    /// Solana.
    Solana,
    /// Not recognized as any supported chain.
    #[default]
    Unknown,
}

impl ChainType {
    /// Parse from its wire representation (case-insensitive).
    ///
    /// Anything unrecognized maps to [`ChainType::Unknown`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "evm" => Self::Evm,
            "solana" => Self::Solana,
            _ => Self::Unknown,
        }
    }

    /// Wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Evm => "EVM",
            Self::Solana => "SOLANA",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Returns true for any tag other than `Unknown`.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for ChainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Syntactic kind of an address-like identifier.
///
/// More granular than [`ChainType`]: raw addresses are distinguished from
/// human-readable names that resolve to a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    /// `0x`-prefixed hex account address.
    Evm,
    /// Base58 public key.
    Solana,
    /// Ethereum Name Service name (`.eth`, `.box`).
    Ens,
    /// Solana Name Service name (`.sol` and friends).
    Sns,
    /// Not recognized.
    #[default]
    Unknown,
}

impl AddressKind {
    /// Chain the identifier lives on (or resolves to).
    #[must_use]
    pub const fn chain_type(&self) -> ChainType {
        match self {
            Self::Evm | Self::Ens => ChainType::Evm,
            Self::Solana | Self::Sns => ChainType::Solana,
            Self::Unknown => ChainType::Unknown,
        }
    }

    /// Returns true for human-readable names.
    #[must_use]
    pub const fn is_name(&self) -> bool {
        matches!(self, Self::Ens | Self::Sns)
    }

    /// Wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Evm => "evm",
            Self::Solana => "solana",
            Self::Ens => "ens",
            Self::Sns => "sns",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for AddressKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod chain_type_tests {
        use super::*;

        #[test]
        fn default_is_unknown() {
            assert_eq!(ChainType::default(), ChainType::Unknown);
            assert!(!ChainType::Unknown.is_known());
            assert!(ChainType::Evm.is_known());
        }

        #[test]
        fn parse_is_case_insensitive() {
            assert_eq!(ChainType::parse("evm"), ChainType::Evm);
            assert_eq!(ChainType::parse("SOLANA"), ChainType::Solana);
            assert_eq!(ChainType::parse(" Solana "), ChainType::Solana);
            assert_eq!(ChainType::parse("bitcoin"), ChainType::Unknown);
        }

        #[test]
        fn serializes_uppercase() {
            assert_eq!(serde_json::to_string(&ChainType::Evm).unwrap(), "\"EVM\"");
            assert_eq!(
                serde_json::from_str::<ChainType>("\"SOLANA\"").unwrap(),
                ChainType::Solana
            );
            assert_eq!(format!("{}", ChainType::Unknown), "UNKNOWN");
        }
    }

    mod address_kind_tests {
        use super::*;

        #[test]
        fn names_map_to_their_chain() {
            assert_eq!(AddressKind::Ens.chain_type(), ChainType::Evm);
            assert_eq!(AddressKind::Sns.chain_type(), ChainType::Solana);
            assert_eq!(AddressKind::Unknown.chain_type(), ChainType::Unknown);
            assert!(AddressKind::Ens.is_name());
            assert!(!AddressKind::Evm.is_name());
        }

        #[test]
        fn serializes_lowercase() {
            assert_eq!(serde_json::to_string(&AddressKind::Sns).unwrap(), "\"sns\"");
            assert_eq!(AddressKind::Solana.to_string(), "solana");
        }
    }
}
