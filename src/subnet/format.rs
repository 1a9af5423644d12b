//! Text renderings of address bytes and range sizes.
//!
//! Every function here is pure. Rendering helpers are total: input of
//! the wrong width renders as the empty string. Counting helpers check
//! widths and fail on mismatch.

use crate::error::{SubnetError, SubnetResult};
use std::net::{Ipv4Addr, Ipv6Addr};

/// 2^128, the inclusive size of the whole IPv6 space. One more than
/// `u128::MAX`, so it cannot be computed in a primitive.
const V6_FULL_RANGE: &str = "340282366920938463463374607431768211456";

/// Render each byte as eight zero-padded binary digits, space separated.
pub fn to_binary(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:08b}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Dotted-decimal form. Defined only for 4-byte input; anything else
/// renders as the empty string.
pub fn to_dotted_decimal(bytes: &[u8]) -> String {
    match <[u8; 4]>::try_from(bytes) {
        Ok(octets) => Ipv4Addr::from(octets).to_string(),
        Err(_) => String::new(),
    }
}

/// Eight 16-bit groups as four lowercase hex digits each, colon
/// separated, without zero compression. Defined only for 16-byte input.
pub fn to_coloned_hex(bytes: &[u8]) -> String {
    if bytes.len() != 16 {
        return String::new();
    }
    bytes
        .chunks(2)
        .map(|pair| format!("{:02x}{:02x}", pair[0], pair[1]))
        .collect::<Vec<_>>()
        .join(":")
}

/// Compressed colon-hex form, as the standard library renders it.
/// Defined only for 16-byte input.
pub fn to_ipv6_text(bytes: &[u8]) -> String {
    match <[u8; 16]>::try_from(bytes) {
        Ok(octets) => Ipv6Addr::from(octets).to_string(),
        Err(_) => String::new(),
    }
}

/// Inclusive and usable address counts for a 4-byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct V4RangeSize {
    /// Inclusive count of addresses between first and last.
    pub total: u64,
    /// Total minus the network and broadcast addresses. Unclamped:
    /// a /31 yields 0 and a /32 yields -1.
    pub usable: i64,
}

/// Count the addresses between two 4-byte endpoints, inclusive.
///
/// Widened to u64 so the full /0 range (2^32 addresses) is exact.
pub fn v4_range_size(first: &[u8], last: &[u8]) -> SubnetResult<V4RangeSize> {
    let first = u32_of(first)?;
    let last = u32_of(last)?;
    let total = u64::from(last.abs_diff(first)) + 1;
    Ok(V4RangeSize {
        total,
        usable: total as i64 - 2,
    })
}

/// Count the addresses between two 16-byte endpoints, inclusive,
/// rendered as a decimal string.
///
/// The absolute difference fits u128; only the full /0 range overflows
/// the final increment and falls back to the literal 2^128 rendering.
pub fn v6_range_size(first: &[u8], last: &[u8]) -> SubnetResult<String> {
    let first = u128_of(first)?;
    let last = u128_of(last)?;
    Ok(match last.abs_diff(first).checked_add(1) {
        Some(total) => total.to_string(),
        None => V6_FULL_RANGE.to_string(),
    })
}

fn u32_of(bytes: &[u8]) -> SubnetResult<u32> {
    <[u8; 4]>::try_from(bytes)
        .map(u32::from_be_bytes)
        .map_err(|_| SubnetError::LengthMismatch {
            left: bytes.len(),
            right: 4,
        })
}

fn u128_of(bytes: &[u8]) -> SubnetResult<u128> {
    <[u8; 16]>::try_from(bytes)
        .map(u128::from_be_bytes)
        .map_err(|_| SubnetError::LengthMismatch {
            left: bytes.len(),
            right: 16,
        })
}
