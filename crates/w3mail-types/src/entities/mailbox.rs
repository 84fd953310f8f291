//! Mailbox and folder types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::wallet::WalletAddress;

/// Unique identifier for a mailbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MailboxId(pub i64);

impl MailboxId {
    /// Creates a new mailbox ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for MailboxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Folder kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum FolderKind {
    /// Incoming mail.
    Inbox,
    /// Sent mail.
    Sent,
    /// Unsent drafts.
    Drafts,
    /// Deleted mail.
    Trash,
    /// Junk.
    Spam,
    /// Archived mail.
    Archive,
    /// Starred messages (virtual).
    Starred,
    /// User-created folder.
    Custom(String),
}

impl FolderKind {
    /// Parse from a folder name (case-insensitive for the well-known ones).
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "inbox" => Self::Inbox,
            "sent" => Self::Sent,
            "drafts" | "draft" => Self::Drafts,
            "trash" => Self::Trash,
            "spam" | "junk" => Self::Spam,
            "archive" => Self::Archive,
            "starred" => Self::Starred,
            _ => Self::Custom(s.to_string()),
        }
    }

    /// Folder name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Inbox => "inbox",
            Self::Sent => "sent",
            Self::Drafts => "drafts",
            Self::Trash => "trash",
            Self::Spam => "spam",
            Self::Archive => "archive",
            Self::Starred => "starred",
            Self::Custom(name) => name,
        }
    }

    /// Returns true for folders every mailbox has.
    #[must_use]
    pub const fn is_system(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl From<String> for FolderKind {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<FolderKind> for String {
    fn from(kind: FolderKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Message counts for one folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailboxFolder {
    /// Folder kind.
    pub kind: FolderKind,
    /// Total messages.
    pub total: u32,
    /// Unread messages.
    pub unread: u32,
}

impl MailboxFolder {
    /// Creates an empty folder.
    #[must_use]
    pub const fn new(kind: FolderKind) -> Self {
        Self {
            kind,
            total: 0,
            unread: 0,
        }
    }
}

/// A user's mailbox, owned by a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mailbox {
    /// Unique identifier (None for unsaved mailboxes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MailboxId>,
    /// Owning wallet.
    pub owner: WalletAddress,
    /// Email address served by this mailbox.
    pub email_address: String,
    /// Folders with their counts.
    #[serde(default)]
    pub folders: Vec<MailboxFolder>,
    /// Storage used in bytes.
    #[serde(default)]
    pub storage_used_bytes: u64,
    /// Storage quota in bytes (0 means unlimited).
    #[serde(default)]
    pub storage_limit_bytes: u64,
    /// When the mailbox was created.
    pub created_at: DateTime<Utc>,
}

impl Mailbox {
    /// Creates a mailbox with the standard system folders.
    #[must_use]
    pub fn new(owner: WalletAddress, email_address: impl Into<String>) -> Self {
        let folders = [
            FolderKind::Inbox,
            FolderKind::Sent,
            FolderKind::Drafts,
            FolderKind::Archive,
            FolderKind::Spam,
            FolderKind::Trash,
        ]
        .into_iter()
        .map(MailboxFolder::new)
        .collect();

        Self {
            id: None,
            owner,
            email_address: email_address.into(),
            folders,
            storage_used_bytes: 0,
            storage_limit_bytes: 0,
            created_at: Utc::now(),
        }
    }

    /// Looks up a folder by kind.
    #[must_use]
    pub fn folder(&self, kind: &FolderKind) -> Option<&MailboxFolder> {
        self.folders.iter().find(|f| &f.kind == kind)
    }

    /// Unread messages across all folders.
    #[must_use]
    pub fn unread_total(&self) -> u32 {
        self.folders.iter().map(|f| f.unread).sum()
    }

    /// Fraction of quota used, None when unlimited.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn storage_ratio(&self) -> Option<f64> {
        if self.storage_limit_bytes == 0 {
            return None;
        }
        Some(self.storage_used_bytes as f64 / self.storage_limit_bytes as f64)
    }
}
