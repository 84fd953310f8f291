//! Integration tests for the utility helpers.
//!
//! Combines helpers the way a service handler would: read an address from a
//! request URL, validate it, cache the result and format it for display.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use proptest::prelude::*;
use w3mail_types::{AddressKind, ClassificationResult, classify_comprehensive};
use w3mail_utils::format::{shorten_address, truncate};
use w3mail_utils::url_params::{get_param, with_params};
use w3mail_utils::{Error, RetryConfig, TtlCache, parse_web3_email, retry, with_timeout};

#[test]
fn address_from_url_is_classified_and_cached() {
    let url = with_params(
        "https://indexer.w3mail.io/validate",
        &[("address", "0xABCDEF1234567890123456789012345678901234")],
    )
    .unwrap();
    let address = get_param(url.as_str(), "address").unwrap().unwrap();

    let mut cache: TtlCache<String, ClassificationResult> = TtlCache::new(Duration::from_secs(30));
    let result = classify_comprehensive(address.as_str());
    cache.insert(result.normalized_form.clone(), result);

    let cached = cache
        .get(&"0xabcdef1234567890123456789012345678901234".to_string())
        .unwrap();
    assert_eq!(cached.address_kind, AddressKind::Evm);
    assert_eq!(
        shorten_address(&cached.normalized_form, 6, 4),
        "0xabcd...1234"
    );
}

#[test]
fn web3_email_local_part_matches_classifier() {
    let email = parse_web3_email("Bonfida.SOL@w3mail.io").unwrap();
    let direct = classify_comprehensive("Bonfida.SOL");
    assert_eq!(email.kind(), direct.address_kind);
    assert_eq!(email.local.as_str(), direct.normalized_form);
}

#[test]
fn timeout_inside_retry_exhausts() {
    let config = RetryConfig {
        max_attempts: 2,
        initial_delay_ms: 1,
        max_delay_ms: 1,
        backoff_factor: 1.0,
    };
    let result: w3mail_utils::Result<()> = tokio_test::block_on(retry(&config, |_| {
        with_timeout(
            Duration::from_millis(5),
            tokio::time::sleep(Duration::from_secs(5)),
        )
    }));
    match result {
        Err(Error::RetryExhausted {
            attempts,
            last_error,
        }) => {
            assert_eq!(attempts, 2);
            assert!(last_error.contains("timed out"));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

proptest! {
    #[test]
    fn truncate_never_exceeds_max(s in any::<String>(), max in 0_usize..64) {
        prop_assert!(truncate(&s, max).chars().count() <= max);
    }

    #[test]
    fn shorten_keeps_ends(s in "[1-9A-HJ-NP-Za-km-z]{0,60}") {
        let short = shorten_address(&s, 4, 4);
        prop_assert!(short.starts_with(&s[..s.len().min(4)]));
        prop_assert!(short.ends_with(&s[s.len().saturating_sub(4)..]));
        prop_assert!(short.len() <= s.len());
    }
}
