//! IPv4 subnet calculator.
//!
//! Given a host address, its current mask and a more specific new mask, work
//! out the network, broadcast, usable host range and subnet/address counts.
//! Also converts between dotted-decimal and 32 binary digit notation.
//!
//! The three core operations are re-exported here:
//! [`parse_address`], [`parse_mask`] and [`compute_split`].

pub mod cli;
pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod validator;

pub use error::{CalcError, Field, FormatError, RangeError};
pub use handler::SubnetHandler;
pub use models::{parse_mask, HostAddr, SubnetDescriptor};
pub use processing::compute_split;

use std::net::Ipv4Addr;

/// Parse a dotted-decimal IPv4 address.
pub fn parse_address(text: &str) -> Result<Ipv4Addr, FormatError> {
    models::decode(text)
}
