//! Wallet types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::address::{AddressError, ParsedAddress};
use crate::chain::ChainType;

/// A raw, ledger-addressable EVM or Solana address in normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress {
    value: String,
    chain_type: ChainType,
}

impl WalletAddress {
    /// Parses a raw address.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, unrecognized, or an ENS/SNS
    /// name rather than a raw address.
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        let parsed = ParsedAddress::parse(input)?;
        if !parsed.is_raw() {
            return Err(AddressError::UnexpectedKind(parsed.kind()));
        }
        let chain_type = parsed.chain_type();
        Ok(Self {
            value: parsed.into_string(),
            chain_type,
        })
    }

    /// Normalized address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Chain the address belongs to.
    #[must_use]
    pub const fn chain_type(&self) -> ChainType {
        self.chain_type
    }

    /// Abbreviated form such as `0x1234...7890`.
    #[must_use]
    pub fn short(&self) -> String {
        let head = if self.value.starts_with("0x") { 6 } else { 4 };
        let tail = 4;
        // Addresses are ASCII, byte slicing is safe.
        format!(
            "{}...{}",
            &self.value[..head],
            &self.value[self.value.len() - tail..]
        )
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<WalletAddress> for String {
    fn from(address: WalletAddress) -> Self {
        address.value
    }
}

impl std::str::FromStr for WalletAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A wallet linked to a user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    /// Wallet address.
    pub address: WalletAddress,
    /// Chain the wallet lives on.
    pub chain_type: ChainType,
    /// Primary ENS/SNS name, if one resolves to this wallet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_service: Option<String>,
    /// User-chosen label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether this is the user's primary wallet.
    #[serde(default)]
    pub is_primary: bool,
    /// When the wallet was linked.
    pub created_at: DateTime<Utc>,
}

impl Wallet {
    /// Creates a wallet for `address`, linked now.
    #[must_use]
    pub fn new(address: WalletAddress) -> Self {
        Self {
            chain_type: address.chain_type(),
            address,
            name_service: None,
            label: None,
            is_primary: false,
            created_at: Utc::now(),
        }
    }

    /// Sets the resolved ENS/SNS name.
    #[must_use]
    pub fn with_name_service(mut self, name: impl Into<String>) -> Self {
        self.name_service = Some(name.into());
        self
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Marks the wallet as primary.
    #[must_use]
    pub const fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }

    /// Name shown to users: label, then name-service name, then short address.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.label
            .clone()
            .or_else(|| self.name_service.clone())
            .unwrap_or_else(|| self.address.short())
    }
}
