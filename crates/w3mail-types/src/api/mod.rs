//! API envelopes for the indexer and the email server.

pub mod email_server;
pub mod indexer;
mod response;

pub use email_server::{
    FolderCountsResponse, MailboxListResponse, MessageListResponse, SendEmailRequest,
    SendEmailResponse,
};
pub use indexer::{
    AddressValidationResponse, DelegationResponse, EmailAddressesResponse, IndexerEvent,
    NonceResponse, PointsResponse, SignatureVerificationResponse,
};
pub use response::{ApiError, ApiErrorCode, ApiResponse, Paginated};
