//! Domain models for IPv4 subnet calculations.
//!
//! This module contains the core data structures and conversions:
//! - [`address`] - dotted-decimal and binary digit conversions
//! - [`mask`] - prefix length / dotted mask normalization
//! - [`SubnetDescriptor`] - result of a subnet split

mod address;
mod mask;
mod subnet;

// Re-export public types
pub use address::{decode, encode, from_binary_digits, to_binary_digits, ADDRESS_BITS};
pub use mask::{get_cidr_mask, mask_to_prefix, parse_mask, prefix_to_dotted, MAX_LENGTH};
pub use subnet::{HostAddr, SubnetDescriptor};
