//! Request and response shapes of the email server backend.

use serde::{Deserialize, Serialize};

use super::response::Paginated;
use crate::entities::{Email, EmailAddress, EmailId, FolderKind, Mailbox, MailboxFolder};

/// Mailboxes owned by the authenticated wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailboxListResponse {
    /// Mailboxes.
    pub mailboxes: Vec<Mailbox>,
}

/// One page of messages in a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageListResponse {
    /// Folder listed.
    pub folder: FolderKind,
    /// Messages on this page.
    #[serde(flatten)]
    pub page: Paginated<Email>,
}

/// Per-folder counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderCountsResponse {
    /// Counts for every folder.
    pub folders: Vec<MailboxFolder>,
}

impl FolderCountsResponse {
    /// Unread count of one folder, zero if absent.
    #[must_use]
    pub fn unread(&self, kind: &FolderKind) -> u32 {
        self.folders
            .iter()
            .find(|f| &f.kind == kind)
            .map_or(0, |f| f.unread)
    }
}

/// Body of `POST /send`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    /// Sender.
    pub from: EmailAddress,
    /// Recipients (email addresses, raw wallet addresses or names).
    pub to: Vec<String>,
    /// CC recipients.
    #[serde(default)]
    pub cc: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// Plain text body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// HTML body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

impl SendEmailRequest {
    /// Recipients that are neither email addresses nor classifiable
    /// wallet addresses or names.
    #[must_use]
    pub fn invalid_recipients(&self) -> Vec<&str> {
        self.to
            .iter()
            .chain(&self.cc)
            .map(String::as_str)
            .filter(|r| crate::entities::MessageRecipient::resolve(r).is_err())
            .collect()
    }
}

/// Result of sending an email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailResponse {
    /// ID of the stored message.
    pub message_id: EmailId,
    /// Recipients that accepted the message.
    pub accepted: Vec<String>,
    /// Recipients that rejected it.
    #[serde(default)]
    pub rejected: Vec<String>,
}

impl SendEmailResponse {
    /// Returns true if every recipient accepted.
    #[must_use]
    pub fn all_accepted(&self) -> bool {
        self.rejected.is_empty()
    }
}
