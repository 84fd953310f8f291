//! Integration tests for address classification.
//!
//! Exercises the public API the way services do: classify raw request
//! input, then embed the result in a response envelope.

#![allow(clippy::unwrap_used)]

use w3mail_types::api::AddressValidationResponse;
use w3mail_types::{
    AddressKind, ApiResponse, ChainType, ParsedAddress, WalletAddress, classify_basic,
    classify_comprehensive, is_ens_name, is_evm_address, is_sns_name, is_solana_address,
};

#[test]
fn scenario_lowercase_evm() {
    let result = classify_comprehensive("0x1234567890123456789012345678901234567890");
    assert!(result.is_valid);
    assert_eq!(result.address_kind, AddressKind::Evm);
    assert_eq!(
        result.normalized_form,
        "0x1234567890123456789012345678901234567890"
    );
}

#[test]
fn scenario_mixed_case_evm() {
    let result = classify_comprehensive("0xABCDEF1234567890123456789012345678901234");
    assert!(result.is_valid);
    assert_eq!(result.address_kind, AddressKind::Evm);
    assert_eq!(
        result.normalized_form,
        "0xabcdef1234567890123456789012345678901234"
    );
}

#[test]
fn scenario_solana() {
    let input = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
    assert_eq!(input.len(), 44);
    let result = classify_comprehensive(input);
    assert!(result.is_valid);
    assert_eq!(result.address_kind, AddressKind::Solana);
    assert_eq!(result.normalized_form, input);
}

#[test]
fn scenario_ens() {
    let lower = classify_comprehensive("test.eth");
    assert!(lower.is_valid);
    assert_eq!(lower.address_kind, AddressKind::Ens);
    assert_eq!(lower.normalized_form, "test.eth");

    let upper = classify_comprehensive("TEST.ETH");
    assert_eq!(upper.normalized_form, "test.eth");
}

#[test]
fn scenario_sns() {
    let result = classify_comprehensive("name.sol");
    assert!(result.is_valid);
    assert_eq!(result.address_kind, AddressKind::Sns);
    assert_eq!(result.normalized_form, "name.sol");

    assert!(!classify_comprehensive("name.invalidtld").is_valid);
}

#[test]
fn scenario_missing() {
    for result in [classify_comprehensive(""), classify_comprehensive(None)] {
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("Address parameter is required"));
    }
}

#[test]
fn scenario_leading_hyphen() {
    assert!(!classify_comprehensive("-test.eth").is_valid);
}

#[test]
fn scenario_basic_ignores_names() {
    let result = classify_basic("test.eth");
    assert!(!result.is_valid);
    assert_eq!(result.chain_type, ChainType::Unknown);
}

#[test]
fn predicates_match_kinds_on_fixtures() {
    let fixtures = [
        ("0x1234567890123456789012345678901234567890", AddressKind::Evm),
        ("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v", AddressKind::Solana),
        ("vitalik.eth", AddressKind::Ens),
        ("wallet.box", AddressKind::Ens),
        ("bonfida.sol", AddressKind::Sns),
        ("degen.bonk", AddressKind::Sns),
        ("0x12", AddressKind::Unknown),
        ("", AddressKind::Unknown),
        ("hello world", AddressKind::Unknown),
    ];

    for (input, kind) in fixtures {
        assert_eq!(classify_comprehensive(input).address_kind, kind, "{input}");
        assert_eq!(is_evm_address(input), kind == AddressKind::Evm, "{input}");
        assert_eq!(is_solana_address(input), kind == AddressKind::Solana, "{input}");
        assert_eq!(is_ens_name(input), kind == AddressKind::Ens, "{input}");
        assert_eq!(is_sns_name(input), kind == AddressKind::Sns, "{input}");
    }
}

#[test]
fn result_embeds_in_envelope() {
    let response = ApiResponse::ok(AddressValidationResponse::classify("Bonfida.SOL"));
    let json = serde_json::to_string(&response).unwrap();
    let back: ApiResponse<AddressValidationResponse> = serde_json::from_str(&json).unwrap();
    let data = back.into_result().unwrap();
    assert_eq!(data.input, "Bonfida.SOL");
    assert_eq!(data.result.normalized_form, "bonfida.sol");
    assert!(data.result.matched_formats.sns);
}

#[test]
fn typed_and_untyped_views_agree() {
    let inputs = [
        "0xABCDEF1234567890123456789012345678901234",
        "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
        "Test.Eth",
        "Name.Sol",
    ];
    for input in inputs {
        let parsed = ParsedAddress::parse(input).unwrap();
        let result = classify_comprehensive(input);
        assert_eq!(parsed.kind(), result.address_kind);
        assert_eq!(parsed.as_str(), result.normalized_form);
        assert_eq!(result.into_parsed().unwrap(), parsed);
    }

    assert!(WalletAddress::parse(inputs[0]).is_ok());
    assert!(WalletAddress::parse(inputs[2]).is_err());
}
