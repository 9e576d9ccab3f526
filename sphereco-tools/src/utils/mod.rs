// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.
//!
//! None of these utilities are specific to SphereCo, they are used by
//! [`sphereco-tools`](crate) to talk to chains and operate on compiled artifacts.

use alloy::primitives::{utils::format_units, Address, U256};

pub mod color;
pub mod sys;

#[cfg(feature = "integration-tests")]
pub mod solc;

/// Formats an address in its EIP-55 checksummed form.
pub fn checksum(address: Address) -> String {
    address.to_checksum(None)
}

/// Pretty-prints a gas amount alongside its cost at the given price.
pub fn format_gas(gas: u64, gas_price: u128) -> String {
    let cost = U256::from(gas_price).saturating_mul(U256::from(gas));
    match format_units(cost, "ether") {
        Ok(eth) => format!("{gas} gas ({eth} ETH)"),
        Err(_) => format!("{gas} gas"),
    }
}

/// Strips an optional `0x` prefix and decodes the remaining hex.
pub fn decode0x(text: impl AsRef<str>) -> Result<Vec<u8>, hex::FromHexError> {
    let text = text.as_ref().trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text)
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    #[test]
    fn checksums_lowercase_address() {
        let addr = address!("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed");
        assert_eq!(checksum(addr), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    }

    #[test]
    fn decodes_with_and_without_prefix() {
        assert_eq!(decode0x("0x6080").unwrap(), vec![0x60, 0x80]);
        assert_eq!(decode0x(" 6080\n").unwrap(), vec![0x60, 0x80]);
        assert!(decode0x("0xzz").is_err());
    }

    #[test]
    fn formats_gas_cost() {
        let text = format_gas(21_000, 1_000_000_000);
        assert!(text.starts_with("21000 gas (0.000021"), "{text}");
        assert!(text.ends_with(" ETH)"), "{text}");
    }
}
