//! On-chain messaging primitives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::email::EmailAddress;
use super::wallet::WalletAddress;
use crate::address::{AddressError, ParsedAddress};
use crate::chain::ChainType;

/// Fee tier of an on-chain message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Normal delivery.
    #[default]
    Standard,
    /// Paid priority delivery.
    Priority,
    /// Delivery to a recipient's preferred (whitelisted) sender list.
    Preferred,
}

/// Confirmation state of an on-chain message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    /// Submitted, not yet confirmed.
    #[default]
    Pending,
    /// Included in a block.
    Confirmed,
    /// Reverted or dropped.
    Failed,
}

/// Where a message is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum MessageRecipient {
    /// A raw wallet address.
    Wallet(WalletAddress),
    /// An ENS or SNS name that still needs resolving.
    #[serde(deserialize_with = "deserialize_name")]
    Name(ParsedAddress),
    /// A conventional email address.
    Email(String),
}

impl MessageRecipient {
    /// Works out the recipient variant from user input.
    ///
    /// Input containing `@` is an email address; everything else must be a
    /// raw address or a name.
    ///
    /// # Errors
    ///
    /// Returns an error when the input is empty or matches no format.
    pub fn resolve(input: &str) -> Result<Self, AddressError> {
        let input = input.trim();
        if input.contains('@') {
            if !EmailAddress::is_well_formed(input) {
                return Err(AddressError::Unrecognized(input.to_string()));
            }
            return Ok(Self::Email(input.to_lowercase()));
        }

        let parsed = ParsedAddress::parse(input)?;
        if parsed.is_raw() {
            WalletAddress::parse(parsed.as_str()).map(Self::Wallet)
        } else {
            Ok(Self::Name(parsed))
        }
    }

    /// Chain the recipient lives on, `Unknown` for email addresses.
    #[must_use]
    pub const fn chain_type(&self) -> ChainType {
        match self {
            Self::Wallet(address) => address.chain_type(),
            Self::Name(name) => name.chain_type(),
            Self::Email(_) => ChainType::Unknown,
        }
    }
}

fn deserialize_name<'de, D>(deserializer: D) -> Result<ParsedAddress, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = ParsedAddress::deserialize(deserializer)?;
    if parsed.is_raw() {
        return Err(serde::de::Error::custom(format!(
            "expected an ENS or SNS name, got {}",
            parsed.kind()
        )));
    }
    Ok(parsed)
}

/// A message recorded on chain by the mail contract or program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnchainMessage {
    /// Transaction hash (EVM) or signature (Solana).
    pub tx_hash: String,
    /// Chain the message was sent on.
    pub chain_type: ChainType,
    /// Sender wallet.
    pub from: WalletAddress,
    /// Recipient.
    pub to: MessageRecipient,
    /// Subject line.
    pub subject: String,
    /// Body, possibly truncated by the indexer.
    pub body: String,
    /// Fee tier.
    #[serde(default)]
    pub message_type: MessageType,
    /// Confirmation state.
    #[serde(default)]
    pub status: DeliveryStatus,
    /// Block or slot number once confirmed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    /// Block timestamp.
    pub timestamp: DateTime<Utc>,
    /// Fee paid in the chain's smallest unit, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_paid: Option<String>,
}

impl OnchainMessage {
    /// Returns true once the message is in a block.
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        matches!(self.status, DeliveryStatus::Confirmed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn resolve_wallet() {
        let recipient =
            MessageRecipient::resolve("0xABCDEF1234567890123456789012345678901234").unwrap();
        assert!(matches!(recipient, MessageRecipient::Wallet(_)));
        assert_eq!(recipient.chain_type(), ChainType::Evm);
    }

    #[test]
    fn resolve_name() {
        let recipient = MessageRecipient::resolve(" Bonfida.sol ").unwrap();
        assert_eq!(
            recipient,
            MessageRecipient::Name(ParsedAddress::Sns("bonfida.sol".to_string()))
        );
        assert_eq!(recipient.chain_type(), ChainType::Solana);
    }

    #[test]
    fn resolve_email() {
        let recipient = MessageRecipient::resolve("Alice@Example.com").unwrap();
        assert_eq!(recipient, MessageRecipient::Email("alice@example.com".to_string()));
        assert_eq!(recipient.chain_type(), ChainType::Unknown);
        assert!(MessageRecipient::resolve("@example.com").is_err());
        assert!(MessageRecipient::resolve("a@b@c.io").is_err());
        assert!(MessageRecipient::resolve("a@b").is_err());
    }

    #[test]
    fn name_rejects_raw_address() {
        let raw = r#"{"type":"name","value":{"kind":"evm","value":"0x1234567890123456789012345678901234567890"}}"#;
        assert!(serde_json::from_str::<MessageRecipient>(raw).is_err());

        let bogus = r#"{"type":"name","value":{"kind":"evm","value":"0xABC"}}"#;
        assert!(serde_json::from_str::<MessageRecipient>(bogus).is_err());

        let name = r#"{"type":"name","value":{"kind":"ens","value":"Test.ETH"}}"#;
        assert_eq!(
            serde_json::from_str::<MessageRecipient>(name).unwrap(),
            MessageRecipient::Name(ParsedAddress::Ens("test.eth".to_string()))
        );
    }

    #[test]
    fn resolve_rejects_garbage() {
        assert_eq!(MessageRecipient::resolve(""), Err(AddressError::Empty));
        assert!(matches!(
            MessageRecipient::resolve("not an address"),
            Err(AddressError::Unrecognized(_))
        ));
    }

    #[test]
    fn message_serde() {
        let message = OnchainMessage {
            tx_hash: "0xdead".to_string(),
            chain_type: ChainType::Evm,
            from: WalletAddress::parse("0x1234567890123456789012345678901234567890").unwrap(),
            to: MessageRecipient::resolve("test.eth").unwrap(),
            subject: "gm".to_string(),
            body: "hello".to_string(),
            message_type: MessageType::Priority,
            status: DeliveryStatus::Confirmed,
            block_number: Some(42),
            timestamp: Utc::now(),
            fee_paid: None,
        };
        assert!(message.is_confirmed());

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["chainType"], "EVM");
        assert_eq!(json["messageType"], "priority");
        assert_eq!(json["to"]["type"], "name");
        assert_eq!(json["to"]["value"]["kind"], "ens");

        let back: OnchainMessage = serde_json::from_value(json).unwrap();
        assert_eq!(back, message);
    }
}
