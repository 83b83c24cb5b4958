//! Subnet mask parsing and rendering.
//!
//! A mask is always normalized to its prefix length (0-32). Dotted masks are
//! accepted only when their one bits form a single run from the top bit.

use super::address::{decode, encode};
use crate::error::FormatError;
use crate::validator::is_valid_address_text;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Returns `None` for prefix lengths above 32.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), Some(0xFFFFFF00));
/// assert_eq!(get_cidr_mask(33), None);
/// ```
pub fn get_cidr_mask(len: u8) -> Option<u32> {
    if len > MAX_LENGTH {
        return None;
    }
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    // Shift in u64 so that /0 doesn't overflow the shift.
    let mask = (all_bits >> right_len) << right_len;
    Some(mask as u32)
}

/// Render a prefix length as a dotted-decimal mask, e.g. 26 -> "255.255.255.192".
pub fn prefix_to_dotted(len: u8) -> Option<String> {
    get_cidr_mask(len).map(|mask| encode(Ipv4Addr::from(mask)))
}

/// Prefix length of a mask value, or `None` when the one bits are not contiguous.
pub fn mask_to_prefix(mask: u32) -> Option<u8> {
    let ones = mask.leading_ones();
    // Every bit after the leading run of ones must be clear.
    let rest = mask.checked_shl(ones).unwrap_or(0);
    if rest == 0 {
        Some(ones as u8)
    } else {
        None
    }
}

/// Normalize a mask given as a prefix length ("24") or dotted mask
/// ("255.255.255.0") into a prefix length.
pub fn parse_mask(input: &str) -> Result<u8, FormatError> {
    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        if let Some(len) = input
            .parse::<u32>()
            .ok()
            .filter(|len| *len <= u32::from(MAX_LENGTH))
        {
            log::trace!("parse_mask({input}) prefix /{len}");
            return Ok(len as u8);
        }
    }

    if !is_valid_address_text(input) {
        return Err(FormatError::MaskSyntax {
            input: input.to_string(),
        });
    }
    let mask = u32::from(decode(input)?);
    mask_to_prefix(mask).ok_or_else(|| {
        log::debug!("Rejecting non-contiguous mask {input}");
        FormatError::NonContiguousMask {
            input: input.to_string(),
        }
    })
}
