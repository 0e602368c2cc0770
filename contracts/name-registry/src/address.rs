use thiserror::Error;

/// Number of raw bytes in a DID address.
pub const ADDRESS_BYTES: usize = 20;

#[derive(Error, Debug, PartialEq)]
pub enum AddressError {
    #[error("invalid address")]
    InvalidAddress {},

    #[error("Invalid zero address")]
    ZeroAddress {},
}

/// Decode a DID address string into its raw bytes.
///
/// Accepts an optional `0x`/`0X` prefix followed by exactly 40 hex digits.
/// The all-zero address is rejected.
pub fn parse(input: &str) -> Result<[u8; ADDRESS_BYTES], AddressError> {
    let payload = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    if payload.len() != ADDRESS_BYTES * 2 {
        return Err(AddressError::InvalidAddress {});
    }

    let decoded = hex::decode(payload).map_err(|_| AddressError::InvalidAddress {})?;
    let bytes: [u8; ADDRESS_BYTES] = decoded
        .try_into()
        .map_err(|_| AddressError::InvalidAddress {})?;

    if bytes == [0u8; ADDRESS_BYTES] {
        return Err(AddressError::ZeroAddress {});
    }

    Ok(bytes)
}

/// Canonical form of a DID address: `0x` + 40 lowercase hex digits.
///
/// Every operation canonicalizes at its boundary; equality and map keys only
/// ever see canonical forms.
pub fn canonicalize(input: &str) -> Result<String, AddressError> {
    let bytes = parse(input)?;
    Ok(format!("0x{}", hex::encode(bytes)))
}
