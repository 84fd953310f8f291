//! Email message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for an email.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailId(pub String);

impl EmailId {
    /// Creates a new email ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A mailbox address with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress {
    /// Address, e.g. `0xabc...@w3mail.io`.
    pub address: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EmailAddress {
    /// Creates an address without a display name.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Local part (before `@`).
    #[must_use]
    pub fn local_part(&self) -> &str {
        self.address
            .split_once('@')
            .map_or(self.address.as_str(), |(local, _)| local)
    }

    /// Domain part (after `@`), if any.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.address.split_once('@').map(|(_, domain)| domain)
    }

    /// Returns true if `address` has one `@`, a non-empty local part and a
    /// dotted domain without empty labels.
    #[must_use]
    pub fn is_well_formed(address: &str) -> bool {
        let Some((local, domain)) = address.split_once('@') else {
            return false;
        };
        !local.is_empty()
            && !domain.contains('@')
            && domain.contains('.')
            && domain.split('.').all(|label| !label.is_empty())
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} <{}>", self.address),
            None => write!(f, "{}", self.address),
        }
    }
}

/// File attached to an email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// File name.
    pub filename: String,
    /// MIME type.
    pub content_type: String,
    /// Size in bytes.
    pub size_bytes: u64,
}

/// Lifecycle of an email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailStatus {
    /// Being composed.
    #[default]
    Draft,
    /// Waiting to be sent.
    Queued,
    /// Handed to the mail server.
    Sent,
    /// Accepted by the recipient's server.
    Delivered,
    /// Sending failed.
    Failed,
    /// Opened by the recipient.
    Read,
}

impl EmailStatus {
    /// Returns true once the email has left the outbox.
    #[must_use]
    pub const fn is_outgoing_complete(&self) -> bool {
        matches!(self, Self::Sent | Self::Delivered | Self::Read)
    }
}

/// Reference to the on-chain record of a sent email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnchainReference {
    /// Transaction hash or signature.
    pub tx_hash: String,
    /// Chain the transaction was sent on.
    pub chain_type: crate::ChainType,
}

/// An email message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    /// Unique identifier (None until stored).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmailId>,
    /// Sender.
    pub from: EmailAddress,
    /// Primary recipients.
    #[serde(default)]
    pub to: Vec<EmailAddress>,
    /// CC recipients.
    #[serde(default)]
    pub cc: Vec<EmailAddress>,
    /// BCC recipients.
    #[serde(default)]
    pub bcc: Vec<EmailAddress>,
    /// Subject line.
    pub subject: String,
    /// Plain text body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_text: Option<String>,
    /// HTML body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    /// Attachments.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Delivery status.
    #[serde(default)]
    pub status: EmailStatus,
    /// When the email was sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<DateTime<Utc>>,
    /// When the email was received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<DateTime<Utc>>,
    /// Whether the email has been read.
    #[serde(default)]
    pub is_read: bool,
    /// Whether the email is starred.
    #[serde(default)]
    pub is_starred: bool,
    /// On-chain delivery record, for mail sent through the messaging contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onchain: Option<OnchainReference>,
}

impl Email {
    /// Creates a draft email.
    #[must_use]
    pub fn new(from: EmailAddress, subject: impl Into<String>) -> Self {
        Self {
            id: None,
            from,
            to: Vec::new(),
            cc: Vec::new(),
            bcc: Vec::new(),
            subject: subject.into(),
            body_text: None,
            body_html: None,
            attachments: Vec::new(),
            status: EmailStatus::Draft,
            sent_at: None,
            received_at: None,
            is_read: false,
            is_starred: false,
            onchain: None,
        }
    }

    /// Adds a primary recipient.
    #[must_use]
    pub fn with_to(mut self, to: EmailAddress) -> Self {
        self.to.push(to);
        self
    }

    /// Adds a CC recipient.
    #[must_use]
    pub fn with_cc(mut self, cc: EmailAddress) -> Self {
        self.cc.push(cc);
        self
    }

    /// Adds a BCC recipient.
    #[must_use]
    pub fn with_bcc(mut self, bcc: EmailAddress) -> Self {
        self.bcc.push(bcc);
        self
    }

    /// Sets the plain text body.
    #[must_use]
    pub fn with_text(mut self, body: impl Into<String>) -> Self {
        self.body_text = Some(body.into());
        self
    }

    /// Sets the HTML body.
    #[must_use]
    pub fn with_html(mut self, body: impl Into<String>) -> Self {
        self.body_html = Some(body.into());
        self
    }

    /// Adds an attachment.
    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Every recipient: to, then cc, then bcc.
    pub fn all_recipients(&self) -> impl Iterator<Item = &EmailAddress> {
        self.to.iter().chain(&self.cc).chain(&self.bcc)
    }

    /// Returns true if the email carries attachments.
    #[must_use]
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    /// Total size of all attachments.
    #[must_use]
    pub fn attachments_size(&self) -> u64 {
        self.attachments.iter().map(|a| a.size_bytes).sum()
    }
}
