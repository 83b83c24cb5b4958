//! Shared IPv4 syntax check.
//!
//! Used by the address codec and the mask parser, and by entry points that
//! want to reject malformed input before doing any arithmetic.

use crate::error::FormatError;

/// Check dotted-decimal syntax and return the four octets.
///
/// Exactly four parts separated by `.`, each made only of ASCII digits with a
/// value in 0-255. Leading zeros are allowed.
pub fn check_address_text(text: &str) -> Result<[u8; 4], FormatError> {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 4 {
        return Err(FormatError::OctetCount {
            input: text.to_string(),
            found: parts.len(),
        });
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts.iter()) {
        *octet = parse_octet(part).ok_or_else(|| FormatError::InvalidOctet {
            input: text.to_string(),
            octet: part.to_string(),
        })?;
    }
    Ok(octets)
}

fn parse_octet(part: &str) -> Option<u8> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Strip leading zeros so long zero padded octets don't overflow the parse.
    let digits = part.trim_start_matches('0');
    if digits.is_empty() {
        Some(0)
    } else if digits.len() > 3 {
        None
    } else {
        digits.parse::<u16>().ok()?.try_into().ok()
    }
}

/// True iff `text` is a dotted-decimal IPv4 address.
pub fn is_valid_address_text(text: &str) -> bool {
    check_address_text(text).is_ok()
}
