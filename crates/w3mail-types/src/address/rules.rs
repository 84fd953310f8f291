//! Syntactic rules for each supported address format.
//!
//! Every predicate here is one branch of the classification cascade in
//! [`super::classify`]. The formats are disjoint: EVM addresses carry a `0x`
//! prefix (and `0` is not a base58 symbol), raw addresses never contain a
//! `.`, and the ENS and SNS suffix sets do not overlap.

use once_cell::sync::Lazy;
use regex::Regex;

/// Top-level identifiers accepted for ENS names.
pub const ENS_SUFFIXES: &[&str] = &["eth", "box"];

/// Top-level identifiers accepted for SNS names.
pub const SNS_SUFFIXES: &[&str] = &["sol", "abc", "bonk", "poor", "gm", "dao", "defi", "web3"];

/// Shortest possible ENS name: one label character plus `.eth`.
pub const ENS_MIN_LEN: usize = 5;

/// Solana public keys encode to between 32 and 44 base58 characters.
pub const SOLANA_MIN_LEN: usize = 32;
/// See [`SOLANA_MIN_LEN`].
pub const SOLANA_MAX_LEN: usize = 44;

/// Bitcoin-style base58 alphabet (no `0`, `O`, `I`, `l`).
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

#[allow(clippy::expect_used)]
static EVM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("EVM address pattern"));

#[allow(clippy::expect_used)]
static SOLANA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{32,44}$").expect("Solana address pattern"));

// Alphanumerics with single interior hyphens.
#[allow(clippy::expect_used)]
static LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9]+(?:-[a-zA-Z0-9]+)*$").expect("DNS label pattern")
});

/// Returns true if `input` is `0x` followed by exactly 40 hex digits.
#[must_use]
pub fn is_evm_address(input: &str) -> bool {
    EVM_PATTERN.is_match(input)
}

/// Returns true if `input` looks like a base58 Solana public key.
///
/// Only the alphabet and length are checked; the key is not decoded.
#[must_use]
pub fn is_solana_address(input: &str) -> bool {
    !input.starts_with("0x")
        && (SOLANA_MIN_LEN..=SOLANA_MAX_LEN).contains(&input.len())
        && SOLANA_PATTERN.is_match(input)
}

/// Returns true if `input` is a DNS-style label.
#[must_use]
pub fn is_valid_label(input: &str) -> bool {
    LABEL_PATTERN.is_match(input)
}

/// Returns true if `input` is an ENS name such as `vitalik.eth` or
/// `pay.vitalik.eth`.
#[must_use]
pub fn is_ens_name(input: &str) -> bool {
    if input.len() < ENS_MIN_LEN {
        return false;
    }
    let Some((name, suffix)) = input.rsplit_once('.') else {
        return false;
    };
    let suffix = suffix.to_ascii_lowercase();
    if !ENS_SUFFIXES.contains(&suffix.as_str()) {
        return false;
    }
    !name.is_empty() && name.split('.').all(is_valid_label)
}

/// Returns true if `input` is an SNS name such as `bonfida.sol`.
#[must_use]
pub fn is_sns_name(input: &str) -> bool {
    let Some((name, suffix)) = input.split_once('.') else {
        return false;
    };
    if suffix.contains('.') {
        return false;
    }
    let suffix = suffix.to_ascii_lowercase();
    SNS_SUFFIXES.contains(&suffix.as_str()) && is_valid_label(name)
}
