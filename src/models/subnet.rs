//! Subnet split result model.

use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;

/// A usable host address, or the explicit marker for subnets without hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostAddr {
    Addr(Ipv4Addr),
    NotApplicable,
}

impl HostAddr {
    pub fn addr(&self) -> Option<Ipv4Addr> {
        match self {
            HostAddr::Addr(addr) => Some(*addr),
            HostAddr::NotApplicable => None,
        }
    }
}

impl std::fmt::Display for HostAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.addr() {
            Some(addr) => write!(f, "{addr}"),
            None => f.write_str("N/A"),
        }
    }
}

impl Serialize for HostAddr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Result of splitting a network into more specific subnets.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetDescriptor {
    /// Number of prefix bits added by the split.
    pub subnet_bits: u8,
    /// Number of subnets the current network is divided into.
    pub subnets_created: u64,
    /// Addresses in each new subnet, network and broadcast included.
    pub addresses_in_subnet: u64,
    /// Usable host addresses per subnet (0 for /31 and /32).
    pub usable_hosts: u64,
    #[serde(rename = "subnet_address")]
    pub network: Ipv4Addr,
    pub first_host: HostAddr,
    pub last_host: HostAddr,
    #[serde(rename = "broadcast_address")]
    pub broadcast: Ipv4Addr,
    /// The new mask in dotted-decimal form.
    pub new_mask_dotted: String,
    /// The new prefix length.
    pub new_mask: u8,
}

impl SubnetDescriptor {
    /// The subnet holding the address, in CIDR notation.
    pub fn cidr(&self) -> String {
        format!("{}/{}", self.network, self.new_mask)
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.network && ip <= self.broadcast
    }
}
