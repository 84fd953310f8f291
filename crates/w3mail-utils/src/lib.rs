//! # w3mail-utils
//!
//! Dependency-light helpers shared by w3mail services.
//!
//! ## Features
//!
//! - **Formatting**: dates, relative times, USD and token amounts, address shortening
//! - **Validation**: email addresses whose local part is a wallet address or name
//! - **URL parameters**: read, set and remove query parameters
//! - **Async wrappers**: timeouts, retries with exponential backoff, debouncing
//! - **TTL cache**: explicitly owned, expiring key-value store
//! - **Logging**: `tracing-subscriber` setup driven by `W3MAIL_LOG`
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::time::Duration;
//! use w3mail_utils::{LogConfig, RetryConfig, init_logging, retry, with_timeout};
//!
//! #[tokio::main]
//! async fn main() -> w3mail_utils::Result<()> {
//!     init_logging(&LogConfig::from_env())?;
//!
//!     let nonce = retry(&RetryConfig::default(), |_| async {
//!         with_timeout(Duration::from_secs(5), fetch_nonce()).await
//!     })
//!     .await?;
//!     println!("nonce: {nonce}");
//!     Ok(())
//! }
//! ```
//!
//! ### Formatting
//!
//! ```
//! use w3mail_utils::format::{format_token_amount, format_usd};
//!
//! assert_eq!(format_usd(1234.5), "$1,234.50");
//! assert_eq!(format_token_amount(1_500_000_000, 9, "SOL"), "1.5 SOL");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod async_ops;
pub mod cache;
pub mod debounce;
mod error;
pub mod format;
pub mod logging;
pub mod url_params;
pub mod validate;

pub use async_ops::{RetryConfig, retry, sleep_ms, with_timeout};
pub use cache::TtlCache;
pub use debounce::Debouncer;
pub use error::{Error, Result};
pub use logging::{LogConfig, init_logging};
pub use validate::{Web3Email, is_valid_email, parse_web3_email};
