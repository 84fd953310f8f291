//! Classification entry points and their result shapes.

use serde::{Deserialize, Serialize};

use super::parsed::{AddressError, ParsedAddress};
use super::rules;
use crate::chain::{AddressKind, ChainType};

/// Which single format an input matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchedFormats {
    /// Matched the EVM address rule.
    pub evm: bool,
    /// Matched the Solana address rule.
    pub solana: bool,
    /// Matched the ENS name rule.
    pub ens: bool,
    /// Matched the SNS name rule.
    pub sns: bool,
}

impl MatchedFormats {
    /// Flags with only the bit for `kind` set.
    #[must_use]
    pub const fn for_kind(kind: AddressKind) -> Self {
        Self {
            evm: matches!(kind, AddressKind::Evm),
            solana: matches!(kind, AddressKind::Solana),
            ens: matches!(kind, AddressKind::Ens),
            sns: matches!(kind, AddressKind::Sns),
        }
    }

    /// Number of formats flagged. Never more than one.
    #[must_use]
    pub fn count(&self) -> usize {
        [self.evm, self.solana, self.ens, self.sns]
            .into_iter()
            .filter(|m| *m)
            .count()
    }
}

/// Outcome of [`classify_comprehensive`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// True iff exactly one format matched.
    pub is_valid: bool,
    /// Matched kind, `Unknown` when invalid.
    pub address_kind: AddressKind,
    /// Canonical form (the raw input when invalid).
    pub normalized_form: String,
    /// Per-format match flags.
    pub matched_formats: MatchedFormats,
    /// Present only when `is_valid` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClassificationResult {
    /// Result for a successfully parsed address.
    #[must_use]
    pub fn valid(parsed: ParsedAddress) -> Self {
        let kind = parsed.kind();
        Self {
            is_valid: true,
            address_kind: kind,
            normalized_form: parsed.into_string(),
            matched_formats: MatchedFormats::for_kind(kind),
            error: None,
        }
    }

    /// Result for input that could not be classified.
    #[must_use]
    pub fn invalid(input: impl Into<String>, error: &AddressError) -> Self {
        Self {
            is_valid: false,
            address_kind: AddressKind::Unknown,
            normalized_form: input.into(),
            matched_formats: MatchedFormats::default(),
            error: Some(error.to_string()),
        }
    }

    /// Chain derived from the matched kind.
    #[must_use]
    pub const fn chain_type(&self) -> ChainType {
        self.address_kind.chain_type()
    }

    /// Converts back into the typed form.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::Unrecognized`] when the result is invalid, and
    /// [`AddressError::KindMismatch`] when `normalized_form` does not
    /// classify as `address_kind`.
    pub fn into_parsed(self) -> Result<ParsedAddress, AddressError> {
        match self.address_kind {
            AddressKind::Unknown if self.normalized_form.is_empty() => Err(AddressError::Empty),
            AddressKind::Unknown => Err(AddressError::Unrecognized(self.normalized_form)),
            kind => ParsedAddress::parse_as(kind, &self.normalized_form),
        }
    }
}

/// Outcome of [`classify_basic`]: raw ledger addresses only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicValidationResult {
    /// True iff the input is a raw EVM or Solana address.
    pub is_valid: bool,
    /// Chain of the address, `Unknown` when invalid.
    pub chain_type: ChainType,
    /// Canonical form (the raw input when invalid).
    pub normalized_form: String,
}

impl BasicValidationResult {
    fn invalid(input: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            chain_type: ChainType::Unknown,
            normalized_form: input.into(),
        }
    }
}

/// Classify any input as an EVM address, Solana address, ENS name or SNS name.
///
/// Accepts a `&str` or `None` (a missing parameter). Never fails: invalid
/// input is reported through `is_valid` and `error`.
#[must_use]
pub fn classify_comprehensive<'a>(input: impl Into<Option<&'a str>>) -> ClassificationResult {
    let input = input.into().unwrap_or_default();
    match ParsedAddress::parse(input) {
        Ok(parsed) => ClassificationResult::valid(parsed),
        Err(err) => ClassificationResult::invalid(input, &err),
    }
}

/// Classify raw EVM or Solana addresses, ignoring ENS and SNS names.
#[must_use]
pub fn classify_basic<'a>(input: impl Into<Option<&'a str>>) -> BasicValidationResult {
    let input = input.into().unwrap_or_default();
    if rules::is_evm_address(input) {
        BasicValidationResult {
            is_valid: true,
            chain_type: ChainType::Evm,
            normalized_form: input.to_ascii_lowercase(),
        }
    } else if rules::is_solana_address(input) {
        BasicValidationResult {
            is_valid: true,
            chain_type: ChainType::Solana,
            normalized_form: input.to_string(),
        }
    } else {
        BasicValidationResult::invalid(input)
    }
}

/// Normalized form of any valid address or name.
#[must_use]
pub fn normalize_address(input: &str) -> Option<String> {
    ParsedAddress::parse(input).ok().map(ParsedAddress::into_string)
}

/// Returns true if both inputs are valid and canonically equal.
///
/// `0xABC…` and `0xabc…` compare equal; Solana keys compare case-sensitively.
#[must_use]
pub fn addresses_equal(a: &str, b: &str) -> bool {
    match (ParsedAddress::parse(a), ParsedAddress::parse(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
