//! End-to-end tests of the `create-addr` subcommands.

use std::io::Write as _;

use clap::Parser;
use create_addr::{common::CliError, MainCmd};
use create_address::{Derivation, DeriveError};
use rstest::rstest;

const SENDER: &str = "0x0000000000000000000000000000000000008006";

fn run(args: &[&str]) -> Result<String, CliError> {
    let cmd = MainCmd::try_parse_from(std::iter::once("create-addr").chain(args.iter().copied()))
        .expect("arguments should parse");
    let mut out = Vec::new();
    cmd.execute(&mut out)?;
    Ok(String::from_utf8(out).expect("output should be utf-8"))
}

#[test]
fn test_derive_reference_vector() {
    let output = run(&["derive", "--sender", SENDER, "--nonce", "3"]).unwrap();
    assert_eq!(output, "contract_address: 0x39ac642b4792e7c424fba677e7b6f9b2d24a65f9\n");
}

#[rstest]
#[case::hex_nonce(&["derive", "--from", "0000000000000000000000000000000000008006", "--nonce", "0x3"])]
#[case::upper_case(&["derive", "--sender", "0X0000000000000000000000000000000000008006", "--nonce", "3"])]
#[case::explicit_scheme(&["derive", "--sender", SENDER, "--nonce", "3", "--scheme", "evm"])]
fn test_derive_accepts_input_forms(#[case] args: &[&str]) {
    let output = run(args).unwrap();
    assert_eq!(output, "contract_address: 0x39ac642b4792e7c424fba677e7b6f9b2d24a65f9\n");
}

#[test]
fn test_derive_zksync() {
    let output =
        run(&["derive", "--sender", SENDER, "--nonce", "3", "--scheme", "zksync"]).unwrap();
    assert_eq!(output, "contract_address: 0xd229a31aafe476b214ee183ca7c80d5677ca4368\n");
}

#[rstest]
#[case::unknown("create2")]
#[case::wrong_case("ZkSync")]
fn test_derive_rejects_unknown_scheme(#[case] scheme: &str) {
    let result = MainCmd::try_parse_from([
        "create-addr",
        "derive",
        "--sender",
        SENDER,
        "--scheme",
        scheme,
    ]);
    let err = result.unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    assert!(err.to_string().contains(&format!("unknown derivation scheme: {scheme}")), "{err}");
}

#[test]
fn test_derive_defaults_to_nonce_zero() {
    let output = run(&["derive", "--sender", SENDER]).unwrap();
    assert_eq!(output, "contract_address: 0x7e948f36d501ad3d8ab8685f8ff249170317fa36\n");
}

#[test]
fn test_derive_range() {
    let output = run(&["derive", "--sender", SENDER, "--nonce", "0", "--count", "4"]).unwrap();
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(
        lines,
        [
            "nonce: 0 contract_address: 0x7e948f36d501ad3d8ab8685f8ff249170317fa36",
            "nonce: 1 contract_address: 0x6a7681f63bfaf653b14cc9cf31e68f9d38ca5004",
            "nonce: 2 contract_address: 0x9190f45118870edd17a73eb2fe6964b5aeb861d8",
            "nonce: 3 contract_address: 0x39ac642b4792e7c424fba677e7b6f9b2d24a65f9",
        ]
    );
}

#[test]
fn test_derive_json_lines() {
    let output =
        run(&["derive", "--sender", SENDER, "--nonce", "1", "--count", "3", "--json"]).unwrap();
    let derivations: Vec<Derivation> =
        output.lines().map(|line| serde_json::from_str(line).unwrap()).collect();
    assert_eq!(derivations.len(), 3);
    assert_eq!(derivations[2].nonce, alloy_primitives::U256::from(3));
    assert_eq!(
        create_address::format_address(&derivations[2].contract_address),
        "0x39ac642b4792e7c424fba677e7b6f9b2d24a65f9"
    );
}

#[test]
fn test_derive_rejects_zero_count() {
    let result =
        MainCmd::try_parse_from(["create-addr", "derive", "--sender", SENDER, "--count", "0"]);
    assert!(result.is_err());
}

#[rstest]
#[case::nineteen_bytes("0x00000000000000000000000000000000008006")]
#[case::twenty_one_bytes("0x000000000000000000000000000000000000008006")]
#[case::not_hex("0x000000000000000000000000000000000000800z")]
fn test_derive_invalid_sender(#[case] sender: &str) {
    let result = run(&["derive", "--sender", sender, "--nonce", "3"]);
    assert!(matches!(result, Err(CliError::Derive(DeriveError::InvalidAddress(_)))));
}

#[rstest]
#[case::negative("-3")]
#[case::fraction("3.5")]
fn test_derive_invalid_nonce(#[case] nonce: &str) {
    let result = run(&["derive", "--sender", SENDER, "--nonce", nonce]);
    assert!(matches!(result, Err(CliError::Derive(DeriveError::InvalidNonce(_)))));
}

#[test]
fn test_encode() {
    let output = run(&["encode", "--sender", SENDER, "--nonce", "3"]).unwrap();
    assert!(output.contains("preimage: 0xd694000000000000000000000000000000000000800603\n"));
    assert!(output.contains(
        "digest: 0x2a510ff8f3ffea7913c83a4e39ac642b4792e7c424fba677e7b6f9b2d24a65f9\n"
    ));
    assert!(output.ends_with("contract_address: 0x39ac642b4792e7c424fba677e7b6f9b2d24a65f9\n"));
}

#[test]
fn test_encode_zero_nonce_is_empty_string() {
    let output = run(&["encode", "--sender", SENDER, "--nonce", "0"]).unwrap();
    assert!(output.contains("preimage: 0xd694000000000000000000000000000000000000800680\n"));
}

#[test]
fn test_decode_positional() {
    let output = run(&["decode", "0xd694000000000000000000000000000000000000800603"]).unwrap();
    assert!(output.contains("sender: 0x0000000000000000000000000000000000008006\n"));
    assert!(output.contains("nonce: 3\n"));
    assert!(output.ends_with("contract_address: 0x39ac642b4792e7c424fba677e7b6f9b2d24a65f9\n"));
}

#[test]
fn test_decode_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "d694000000000000000000000000000000000000800603").unwrap();
    let path = file.path().to_str().unwrap();

    let output = run(&["decode", "--payloadfile", path, "--scheme", "zksync", "--json"]).unwrap();
    let derivation: Derivation = serde_json::from_str(output.trim_end()).unwrap();
    assert_eq!(
        create_address::format_address(&derivation.contract_address),
        "0xd229a31aafe476b214ee183ca7c80d5677ca4368"
    );
}

#[test]
fn test_decode_rejects_malformed_payload() {
    let result = run(&["decode", "0xd69400"]);
    assert!(matches!(result, Err(CliError::Derive(DeriveError::EncodingFailure(_)))));

    let result = run(&["decode"]);
    assert!(matches!(result, Err(CliError::InvalidInput(_))));

    let result = run(&["decode", "0xd69"]);
    assert!(matches!(result, Err(CliError::InvalidInput(_))));
}
