//! Business entities shared across w3mail services.

pub mod email;
pub mod mailbox;
pub mod messaging;
pub mod wallet;

pub use email::{Attachment, Email, EmailAddress, EmailId, EmailStatus, OnchainReference};
pub use mailbox::{FolderKind, Mailbox, MailboxFolder, MailboxId};
pub use messaging::{DeliveryStatus, MessageRecipient, MessageType, OnchainMessage};
pub use wallet::{Wallet, WalletAddress};
