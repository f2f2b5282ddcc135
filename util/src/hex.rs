//! Decoding byte buffers from hexadecimal strings such as `0xff00`.
//!
//! An optional prefix ending in `x`, such as `0x`, is skipped. The lenient
//! [bytes_from_hex] drops a trailing odd digit; [try_bytes_from_hex] rejects it.

use log::debug;

use crate::error::{Error, Result};

/// Strip an optional `0x`/`x` prefix.
///
/// The input is split at every `x` with empty pieces discarded. A single
/// piece is the digit string; otherwise the second piece is. An input made
/// of nothing but `x`s has no digits at all.
fn hex_digits(s: &str) -> &str {
    let mut pieces = s.split('x').filter(|p| !p.is_empty());
    match (pieces.next(), pieces.next()) {
        (Some(only), None) => only,
        (Some(_), Some(second)) => second,
        (None, _) => "",
    }
}

/// Decode `s` into bytes, two hex digits per byte.
///
/// Returns `None` if any digit pair is not valid hexadecimal. A trailing
/// unpaired digit is ignored. Pairs must be two hex digits; a sign such as
/// in `+f` is rejected rather than read as a number.
///
/// # Examples
///
/// ```
/// use extkit_util::hex::bytes_from_hex;
///
/// assert_eq!(bytes_from_hex("0xff00"), Some(vec![0xff, 0x00]));
/// assert_eq!(bytes_from_hex("abc"), Some(vec![0xab]));
/// assert_eq!(bytes_from_hex("xyz"), None);
/// ```
pub fn bytes_from_hex(s: &str) -> Option<Vec<u8>> {
    let digits = hex_digits(s);
    let paired: String = {
        let count = digits.chars().count();
        digits.chars().take(count - count % 2).collect()
    };
    ::hex::decode(paired)
        .map_err(|e| debug!("Ignoring undecodable hex string {s:?}: {e}"))
        .ok()
}

/// Decode `s` into bytes, rejecting odd digit counts.
///
/// # Errors
///
/// [Error::OddHexLength] if the digits cannot be paired up, [Error::InvalidHex]
/// if a digit is not hexadecimal.
pub fn try_bytes_from_hex(s: &str) -> Result<Vec<u8>> {
    let digits = hex_digits(s);
    let count = digits.chars().count();
    if count % 2 != 0 {
        return Err(Error::OddHexLength(count));
    }
    Ok(::hex::decode(digits)?)
}

/// Constructor-style access to [bytes_from_hex] for byte buffers
///
/// # Examples
///
/// ```
/// use extkit_util::hex::FromHexStr;
///
/// assert_eq!(Vec::<u8>::from_hex_str("0x0a0b"), Some(vec![10, 11]));
/// assert!(Vec::<u8>::try_from_hex_str("0x0a0").is_err());
/// ```
pub trait FromHexStr: Sized {
    fn from_hex_str(s: &str) -> Option<Self>;

    fn try_from_hex_str(s: &str) -> Result<Self>;
}

impl FromHexStr for Vec<u8> {
    fn from_hex_str(s: &str) -> Option<Self> {
        bytes_from_hex(s)
    }

    fn try_from_hex_str(s: &str) -> Result<Self> {
        try_bytes_from_hex(s)
    }
}
