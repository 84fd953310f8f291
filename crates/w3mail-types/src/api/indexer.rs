//! Response shapes served by the indexer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::address::{BasicValidationResult, ClassificationResult, classify_comprehensive};
use crate::chain::ChainType;
use crate::entities::{MessageType, WalletAddress};

/// Result of `GET /address/{input}/validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressValidationResponse {
    /// The input as received.
    pub input: String,
    /// Classification outcome.
    #[serde(flatten)]
    pub result: ClassificationResult,
}

impl AddressValidationResponse {
    /// Classifies `input` and wraps the result.
    #[must_use]
    pub fn classify(input: &str) -> Self {
        Self {
            input: input.to_string(),
            result: classify_comprehensive(input),
        }
    }
}

/// Result of verifying a wallet signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureVerificationResponse {
    /// Whether the signature matched the address.
    pub verified: bool,
    /// Signing address as classified.
    pub address: BasicValidationResult,
    /// Message that was signed.
    pub message: String,
    /// Reason verification failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Sign-in nonce for a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonceResponse {
    /// Wallet the nonce was issued for.
    pub wallet: WalletAddress,
    /// Nonce to embed in the signed message.
    pub nonce: String,
    /// When the nonce stops being accepted.
    pub expires_at: DateTime<Utc>,
}

/// Email addresses a wallet may send from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAddressesResponse {
    /// Wallet queried.
    pub wallet: WalletAddress,
    /// Chain of the wallet.
    pub chain_type: ChainType,
    /// Addresses available to the wallet.
    pub email_addresses: Vec<String>,
}

impl EmailAddressesResponse {
    /// Builds the address list for `wallet` under `domain`.
    ///
    /// The raw address always comes first, followed by every name the
    /// wallet owns.
    #[must_use]
    pub fn derive(wallet: WalletAddress, names: &[String], domain: &str) -> Self {
        let email_addresses = std::iter::once(wallet.as_str().to_string())
            .chain(names.iter().map(|n| n.to_lowercase()))
            .map(|local| format!("{local}@{domain}"))
            .collect();
        Self {
            chain_type: wallet.chain_type(),
            wallet,
            email_addresses,
        }
    }
}

/// Mail delegation from one wallet to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegationResponse {
    /// Delegating wallet.
    pub delegator: WalletAddress,
    /// Wallet allowed to act on the delegator's mail, None if revoked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegate: Option<WalletAddress>,
    /// Transaction that set the delegation.
    pub tx_hash: String,
    /// When it was set.
    pub updated_at: DateTime<Utc>,
}

impl DelegationResponse {
    /// Returns true if a delegate is set.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.delegate.is_some()
    }
}

/// Reward points for a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsResponse {
    /// Wallet queried.
    pub wallet: WalletAddress,
    /// Total points.
    pub total_points: u64,
    /// Leaderboard rank, if ranked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    /// Last time points changed.
    pub last_updated: DateTime<Utc>,
}

/// Event emitted by the indexer's change feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum IndexerEvent {
    /// A mail message was recorded on chain.
    #[serde(rename_all = "camelCase")]
    MailSent {
        /// Sender.
        from: WalletAddress,
        /// Recipient (address, name or email as sent).
        to: String,
        /// Fee tier.
        message_type: MessageType,
        /// Transaction.
        tx_hash: String,
        /// Block or slot.
        block_number: u64,
    },
    /// Delegation changed.
    #[serde(rename_all = "camelCase")]
    DelegationSet {
        /// Delegating wallet.
        delegator: WalletAddress,
        /// New delegate, None if revoked.
        delegate: Option<WalletAddress>,
        /// Transaction.
        tx_hash: String,
    },
    /// Points were awarded.
    #[serde(rename_all = "camelCase")]
    PointsAwarded {
        /// Recipient wallet.
        wallet: WalletAddress,
        /// Points added.
        points: u64,
        /// Reason code.
        reason: String,
    },
}

impl IndexerEvent {
    /// Wallet the event is primarily about.
    #[must_use]
    pub const fn subject(&self) -> &WalletAddress {
        match self {
            Self::MailSent { from, .. } => from,
            Self::DelegationSet { delegator, .. } => delegator,
            Self::PointsAwarded { wallet, .. } => wallet,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::AddressKind;

    fn wallet() -> WalletAddress {
        WalletAddress::parse("0x1234567890123456789012345678901234567890").unwrap()
    }

    #[test]
    fn validation_response_flattens() {
        let response = AddressValidationResponse::classify("Test.ETH");
        assert_eq!(response.result.address_kind, AddressKind::Ens);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["input"], "Test.ETH");
        assert_eq!(json["isValid"], true);
        assert_eq!(json["normalizedForm"], "test.eth");

        let back: AddressValidationResponse = serde_json::from_value(json).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn signature_response_embeds_basic_result() {
        let response = SignatureVerificationResponse {
            verified: false,
            address: crate::address::classify_basic("test.eth"),
            message: "Sign in".to_string(),
            error: Some("not a raw address".to_string()),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["address"]["chainType"], "UNKNOWN");
        assert_eq!(json["address"]["isValid"], false);
    }

    #[test]
    fn derive_email_addresses() {
        let names = vec!["Alice.eth".to_string(), "alice.box".to_string()];
        let response = EmailAddressesResponse::derive(wallet(), &names, "w3mail.io");
        assert_eq!(response.chain_type, ChainType::Evm);
        assert_eq!(
            response.email_addresses,
            vec![
                "0x1234567890123456789012345678901234567890@w3mail.io",
                "alice.eth@w3mail.io",
                "alice.box@w3mail.io",
            ]
        );
    }

    #[test]
    fn delegation_active() {
        let response = DelegationResponse {
            delegator: wallet(),
            delegate: None,
            tx_hash: "0x01".to_string(),
            updated_at: Utc::now(),
        };
        assert!(!response.is_active());
    }

    #[test]
    fn events_are_tagged() {
        let event = IndexerEvent::PointsAwarded {
            wallet: wallet(),
            points: 10,
            reason: "first_mail".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "pointsAwarded");
        assert_eq!(json["points"], 10);

        let parsed: IndexerEvent = serde_json::from_str(
            r#"{"type":"mailSent","from":"0x1234567890123456789012345678901234567890",
                "to":"bob.eth","messageType":"priority","txHash":"0xff","blockNumber":7}"#,
        )
        .unwrap();
        assert_eq!(parsed.subject(), &wallet());
        assert!(matches!(
            parsed,
            IndexerEvent::MailSent { message_type: MessageType::Priority, block_number: 7, .. }
        ));
    }

    #[test]
    fn events_reject_bad_wallets() {
        let result = serde_json::from_str::<IndexerEvent>(
            r#"{"type":"pointsAwarded","wallet":"nope","points":1,"reason":"x"}"#,
        );
        assert!(result.is_err());
    }
}
