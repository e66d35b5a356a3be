//! Rendering of derivations.

use std::io::Write;

use alloy_primitives::hex;
use create_address::{format_address, Derivation};

use super::Result;

/// Writes `contract_address: 0x…`, prefixed with the nonce when `with_nonce` is set.
pub fn write_address_line<W: Write>(
    out: &mut W,
    derivation: &Derivation,
    with_nonce: bool,
) -> Result<()> {
    let address = format_address(&derivation.contract_address);
    if with_nonce {
        writeln!(out, "nonce: {} contract_address: {address}", derivation.nonce)?;
    } else {
        writeln!(out, "contract_address: {address}")?;
    }
    Ok(())
}

/// Writes every intermediate value of a derivation, one `key: value` per line.
pub fn write_derivation<W: Write>(out: &mut W, derivation: &Derivation) -> Result<()> {
    writeln!(out, "scheme: {}", derivation.scheme)?;
    writeln!(out, "sender: {}", format_address(&derivation.sender))?;
    writeln!(out, "nonce: {}", derivation.nonce)?;
    writeln!(out, "preimage: {}", hex::encode_prefixed(&derivation.preimage))?;
    writeln!(out, "digest: {}", hex::encode_prefixed(derivation.digest))?;
    writeln!(out, "contract_address: {}", format_address(&derivation.contract_address))?;
    Ok(())
}

/// Writes a derivation as a single line of JSON.
pub fn write_json_line<W: Write>(out: &mut W, derivation: &Derivation) -> Result<()> {
    serde_json::to_writer(&mut *out, derivation)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, U256};
    use create_address::AddressDeriver;

    fn derivation() -> Derivation {
        AddressDeriver::default()
            .trace(address!("0x0000000000000000000000000000000000008006"), U256::from(3))
    }

    #[test]
    fn test_write_address_line() {
        let mut out = Vec::new();
        write_address_line(&mut out, &derivation(), false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "contract_address: 0x39ac642b4792e7c424fba677e7b6f9b2d24a65f9\n"
        );

        let mut out = Vec::new();
        write_address_line(&mut out, &derivation(), true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "nonce: 3 contract_address: 0x39ac642b4792e7c424fba677e7b6f9b2d24a65f9\n"
        );
    }

    #[test]
    fn test_write_derivation() {
        let mut out = Vec::new();
        write_derivation(&mut out, &derivation()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text.lines().collect::<Vec<_>>(),
            [
                "scheme: evm",
                "sender: 0x0000000000000000000000000000000000008006",
                "nonce: 3",
                "preimage: 0xd694000000000000000000000000000000000000800603",
                "digest: 0x2a510ff8f3ffea7913c83a4e39ac642b4792e7c424fba677e7b6f9b2d24a65f9",
                "contract_address: 0x39ac642b4792e7c424fba677e7b6f9b2d24a65f9",
            ]
        );
    }

    #[test]
    fn test_write_json_line() {
        let mut out = Vec::new();
        write_json_line(&mut out, &derivation()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        let parsed: Derivation = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(parsed, derivation());
    }
}
