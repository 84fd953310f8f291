//! Email and domain format validation.

use serde::{Deserialize, Serialize};
use tracing::debug;
use w3mail_types::address::rules::is_valid_label;
use w3mail_types::{AddressKind, ChainType, EmailAddress, ParsedAddress};

use crate::error::{Error, Result};

/// Basic email validation: one `@`, a non-empty local part and a dotted
/// domain. Surrounding whitespace is ignored.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EmailAddress::is_well_formed(email.trim())
}

/// Returns true for a hostname of at least two DNS labels with an
/// alphabetic top-level label.
#[must_use]
pub fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.len() > 63) {
        return false;
    }
    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));
    tld_ok && labels.iter().all(|l| is_valid_label(l))
}

/// An email address whose local part is a wallet address or name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Web3Email {
    /// Classified local part, normalized.
    pub local: ParsedAddress,
    /// Domain, lowercased.
    pub domain: String,
}

impl Web3Email {
    /// Kind of identifier in the local part.
    #[must_use]
    pub const fn kind(&self) -> AddressKind {
        self.local.kind()
    }

    /// Chain the local part belongs to.
    #[must_use]
    pub const fn chain_type(&self) -> ChainType {
        self.local.chain_type()
    }

    /// Canonical `local@domain` form.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}@{}", self.local, self.domain)
    }
}

impl std::fmt::Display for Web3Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.local, self.domain)
    }
}

/// Parses an email such as `0xabc…@w3mail.io` or `vitalik.eth@w3mail.io`.
///
/// # Errors
///
/// Returns `Error::InvalidEmail` for malformed addresses or domains, and an
/// address error when the local part is not a wallet address or name.
pub fn parse_web3_email(email: &str) -> Result<Web3Email> {
    let email = email.trim();
    if !is_valid_email(email) {
        return Err(Error::InvalidEmail(email.to_string()));
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(Error::InvalidEmail(email.to_string()));
    };
    if !is_valid_domain(domain) {
        return Err(Error::InvalidEmail(email.to_string()));
    }

    let local = ParsedAddress::parse(local).inspect_err(|err| {
        debug!(email, %err, "Email local part is not a Web3 identifier");
    })?;

    Ok(Web3Email {
        local,
        domain: domain.to_ascii_lowercase(),
    })
}
