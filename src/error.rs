//! Error types for address, mask and split calculations.
//!
//! - [`FormatError`] - malformed text (address, binary digits, mask syntax)
//! - [`RangeError`] - well formed values outside the allowed range
//! - [`CalcError`] - handler level error naming the input field at fault

use std::fmt;
use thiserror::Error;

/// Input field a handler error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Address,
    CurrentMask,
    NewMask,
    Binary,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Field::Address => "IP address",
            Field::CurrentMask => "current mask",
            Field::NewMask => "new mask",
            Field::Binary => "binary address",
        };
        f.write_str(name)
    }
}

/// Malformed textual input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid IP address {input:?}: expected 4 octets, found {found}")]
    OctetCount { input: String, found: usize },

    #[error("invalid IP address {input:?}: octet {octet:?} is not a number in 0-255")]
    InvalidOctet { input: String, octet: String },

    #[error("invalid binary format {input:?}: expected 32 digits, found {len}")]
    BinaryLength { input: String, len: usize },

    #[error("invalid binary format {input:?}: {digit:?} is not 0 or 1")]
    BinaryDigit { input: String, digit: char },

    #[error("invalid mask format {input:?}: expected a prefix length 0-32 or a dotted mask")]
    MaskSyntax { input: String },

    #[error("invalid mask {input:?}: mask bits are not contiguous")]
    NonContiguousMask { input: String },
}

/// Structurally valid values outside their semantic range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("{field} /{prefix} out of range, mask must be between 0 and 32")]
    PrefixOutOfRange { field: Field, prefix: u8 },

    #[error("new mask /{new} must be at least as specific as the current mask /{current}")]
    LessSpecific { current: u8, new: u8 },
}

/// Error returned by [`crate::SubnetHandler`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("{field}: {source}")]
    Format {
        field: Field,
        #[source]
        source: FormatError,
    },

    #[error(transparent)]
    Range(#[from] RangeError),
}

impl CalcError {
    pub fn format(field: Field, source: FormatError) -> Self {
        CalcError::Format { field, source }
    }

    /// The field the error refers to, when known.
    pub fn field(&self) -> Option<Field> {
        match self {
            CalcError::Format { field, .. } => Some(*field),
            CalcError::Range(RangeError::PrefixOutOfRange { field, .. }) => Some(*field),
            CalcError::Range(RangeError::LessSpecific { .. }) => Some(Field::NewMask),
        }
    }
}
