//! Display formatting for dates, amounts and strings.

pub mod currency;
pub mod date;
pub mod text;

pub use currency::{format_compact, format_token_amount, format_usd};
pub use date::{format_date, format_date_time, format_relative, parse_iso8601};
pub use text::{capitalize, pluralize, shorten_address, truncate};
