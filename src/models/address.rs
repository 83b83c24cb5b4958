//! IPv4 address text and binary digit conversions.
//!
//! Addresses are carried as [`Ipv4Addr`], i.e. a 32-bit unsigned integer.

use crate::error::FormatError;
use crate::validator::check_address_text;
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Number of bits in an IPv4 address.
pub const ADDRESS_BITS: usize = 32;

/// Parse dotted-decimal text into an [`Ipv4Addr`].
///
/// Each of the four octets must consist only of ASCII digits and be in 0-255.
/// Leading zeros are accepted, so `"010.1.1.1"` decodes as `10.1.1.1`.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::decode;
/// assert_eq!(u32::from(decode("192.168.1.1").unwrap()), 3232235777);
/// ```
pub fn decode(text: &str) -> Result<Ipv4Addr, FormatError> {
    check_address_text(text).map(Ipv4Addr::from)
}

/// Render an address as four dotted decimal octets.
pub fn encode(addr: Ipv4Addr) -> String {
    addr.octets().iter().join(".")
}

/// Render an address as 32 binary digits, most significant bit first.
pub fn to_binary_digits(addr: Ipv4Addr) -> String {
    format!("{:032b}", u32::from(addr))
}

/// Parse a string of exactly 32 `'0'`/`'1'` characters into an address.
pub fn from_binary_digits(text: &str) -> Result<Ipv4Addr, FormatError> {
    let len = text.chars().count();
    if len != ADDRESS_BITS {
        return Err(FormatError::BinaryLength {
            input: text.to_string(),
            len,
        });
    }
    if let Some(digit) = text.chars().find(|c| *c != '0' && *c != '1') {
        return Err(FormatError::BinaryDigit {
            input: text.to_string(),
            digit,
        });
    }

    let bits = text
        .bytes()
        .fold(0u32, |acc, b| (acc << 1) | u32::from(b - b'0'));
    log::trace!("from_binary_digits({text}) = {bits:#010x}");
    Ok(Ipv4Addr::from(bits))
}
