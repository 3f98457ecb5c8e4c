use super::WalletError;
use alloy::primitives::Address;
use std::str::FromStr;

/// Parses a 20-byte hexadecimal address, with or without the `0x` prefix.
///
/// Unlike a lenient hex-to-address conversion, a wrong-length input is an error
/// instead of being padded or truncated.
pub fn parse_address(value: &str) -> Result<Address, WalletError> {
    Address::from_str(value.trim()).map_err(|e| WalletError::InvalidAddress {
        value: value.to_string(),
        source: Box::new(e),
    })
}
