//! Subnet split arithmetic.
//!
//! Everything is computed on the u32 form of the address with the prefix
//! mask; there is a single code path for every prefix length, /0 to /32.

use crate::error::{Field, RangeError};
use crate::models::{get_cidr_mask, prefix_to_dotted, HostAddr, SubnetDescriptor};
use std::net::Ipv4Addr;

fn check_prefix(field: Field, prefix: u8) -> Result<u32, RangeError> {
    get_cidr_mask(prefix).ok_or(RangeError::PrefixOutOfRange { field, prefix })
}

/// Network and broadcast bits of the subnet holding `addr`.
///
/// `len` is the subnet prefix; out of range values are reported against the
/// new mask, the prefix a split produces subnets at.
fn subnet_bounds(addr: Ipv4Addr, len: u8) -> Result<(u32, u32), RangeError> {
    let mask = check_prefix(Field::NewMask, len)?;
    let network = u32::from(addr) & mask;
    Ok((network, network | !mask))
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, RangeError> {
    let (network, _) = subnet_bounds(addr, len)?;
    Ok(Ipv4Addr::from(network))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, RangeError> {
    let (_, broadcast) = subnet_bounds(addr, len)?;
    Ok(Ipv4Addr::from(broadcast))
}

/// Usable hosts for a subnet size. /31 and /32 have none.
fn num_usable_hosts(addresses: u64) -> u64 {
    if addresses > 2 {
        addresses - 2
    } else {
        0
    }
}

/// First and last usable host of the subnet containing `addr`.
///
/// Returns `None` when the subnet has no usable hosts (/31 and /32).
pub fn host_range(addr: Ipv4Addr, len: u8) -> Result<Option<(Ipv4Addr, Ipv4Addr)>, RangeError> {
    let (network, broadcast) = subnet_bounds(addr, len)?;
    if num_usable_hosts(u64::from(broadcast - network) + 1) == 0 {
        return Ok(None);
    }
    Ok(Some((
        Ipv4Addr::from(network + 1),
        Ipv4Addr::from(broadcast - 1),
    )))
}

/// Split the `/current_prefix` network holding `address` into `/new_prefix`
/// subnets and describe the subnet `address` falls into.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::compute_split;
/// use std::net::Ipv4Addr;
/// let split = compute_split(Ipv4Addr::new(192, 168, 1, 10), 24, 26).unwrap();
/// assert_eq!(split.subnets_created, 4);
/// assert_eq!(split.broadcast, Ipv4Addr::new(192, 168, 1, 63));
/// ```
pub fn compute_split(
    address: Ipv4Addr,
    current_prefix: u8,
    new_prefix: u8,
) -> Result<SubnetDescriptor, RangeError> {
    check_prefix(Field::CurrentMask, current_prefix)?;
    check_prefix(Field::NewMask, new_prefix)?;
    if new_prefix < current_prefix {
        return Err(RangeError::LessSpecific {
            current: current_prefix,
            new: new_prefix,
        });
    }

    let network = cut_addr(address, new_prefix)?;
    let broadcast = broadcast_addr(address, new_prefix)?;

    let subnet_bits = new_prefix - current_prefix;
    let subnets_created = 1u64 << subnet_bits;
    let addresses_in_subnet = u64::from(u32::from(broadcast) - u32::from(network)) + 1;
    let usable_hosts = num_usable_hosts(addresses_in_subnet);

    let (first_host, last_host) = match host_range(address, new_prefix)? {
        Some((first, last)) => (HostAddr::Addr(first), HostAddr::Addr(last)),
        None => (HostAddr::NotApplicable, HostAddr::NotApplicable),
    };

    let new_mask_dotted = prefix_to_dotted(new_prefix).ok_or(RangeError::PrefixOutOfRange {
        field: Field::NewMask,
        prefix: new_prefix,
    })?;

    log::debug!(
        "compute_split({address}, /{current_prefix}, /{new_prefix}) network={network} broadcast={broadcast} subnets={subnets_created}"
    );

    let split = SubnetDescriptor {
        subnet_bits,
        subnets_created,
        addresses_in_subnet,
        usable_hosts,
        network,
        first_host,
        last_host,
        broadcast,
        new_mask_dotted,
        new_mask: new_prefix,
    };
    debug_assert!(split.contains(address));
    Ok(split)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 8).unwrap(), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(cut_addr(ip, 0).unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 42));
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 16).unwrap(),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(broadcast_addr(ip, 0).unwrap(), Ipv4Addr::BROADCAST);
        assert_eq!(
            broadcast_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );
        assert!(broadcast_addr(Ipv4Addr::BROADCAST, 24).is_ok());
    }

    #[test]
    fn test_host_range() {
        let ip = Ipv4Addr::new(10, 1, 2, 3);
        assert_eq!(
            host_range(ip, 24).unwrap(),
            Some((Ipv4Addr::new(10, 1, 2, 1), Ipv4Addr::new(10, 1, 2, 254)))
        );
        assert_eq!(
            host_range(ip, 30).unwrap(),
            Some((Ipv4Addr::new(10, 1, 2, 1), Ipv4Addr::new(10, 1, 2, 2)))
        );
        assert_eq!(host_range(ip, 31).unwrap(), None);
        assert_eq!(host_range(ip, 32).unwrap(), None);
        assert!(host_range(ip, 33).is_err());
    }

    #[test]
    fn test_compute_split_matches_subnet_helpers() {
        let ip = Ipv4Addr::new(172, 31, 200, 77);
        for new in 0..=32u8 {
            let split = compute_split(ip, 0, new).unwrap();
            assert_eq!(split.network, cut_addr(ip, new).unwrap());
            assert_eq!(split.broadcast, broadcast_addr(ip, new).unwrap());
            let hosts = host_range(ip, new).unwrap();
            assert_eq!(split.first_host.addr(), hosts.map(|(first, _)| first));
            assert_eq!(split.last_host.addr(), hosts.map(|(_, last)| last));
            assert_eq!(split.usable_hosts > 0, hosts.is_some(), "/{new}");
        }
    }

    #[test]
    fn test_subnet_helpers_reject_prefix_as_new_mask() {
        let ip = Ipv4Addr::new(10, 0, 0, 1);
        let expected = RangeError::PrefixOutOfRange {
            field: Field::NewMask,
            prefix: 33,
        };
        assert_eq!(cut_addr(ip, 33).unwrap_err(), expected);
        assert_eq!(broadcast_addr(ip, 33).unwrap_err(), expected);
        assert_eq!(host_range(ip, 33).unwrap_err(), expected);
    }

    #[test]
    fn test_compute_split_192_168_1_10() {
        let split = compute_split(Ipv4Addr::new(192, 168, 1, 10), 24, 26).unwrap();
        assert_eq!(split.subnet_bits, 2);
        assert_eq!(split.subnets_created, 4);
        assert_eq!(split.addresses_in_subnet, 64);
        assert_eq!(split.usable_hosts, 62);
        assert_eq!(split.network, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(split.first_host, HostAddr::Addr(Ipv4Addr::new(192, 168, 1, 1)));
        assert_eq!(split.last_host, HostAddr::Addr(Ipv4Addr::new(192, 168, 1, 62)));
        assert_eq!(split.broadcast, Ipv4Addr::new(192, 168, 1, 63));
        assert_eq!(split.new_mask_dotted, "255.255.255.192");
        assert_eq!(split.new_mask, 26);
        assert_eq!(split.cidr(), "192.168.1.0/26");
        assert!(split.contains(Ipv4Addr::new(192, 168, 1, 10)));
        assert!(!split.contains(Ipv4Addr::new(192, 168, 1, 64)));
    }

    #[test]
    fn test_compute_split_slash_32() {
        let split = compute_split(Ipv4Addr::new(10, 0, 0, 7), 24, 32).unwrap();
        assert_eq!(split.subnet_bits, 8);
        assert_eq!(split.subnets_created, 256);
        assert_eq!(split.addresses_in_subnet, 1);
        assert_eq!(split.usable_hosts, 0);
        assert_eq!(split.network, Ipv4Addr::new(10, 0, 0, 7));
        assert_eq!(split.broadcast, Ipv4Addr::new(10, 0, 0, 7));
        assert_eq!(split.first_host, HostAddr::NotApplicable);
        assert_eq!(split.last_host, HostAddr::NotApplicable);
        assert_eq!(split.new_mask_dotted, "255.255.255.255");
    }

    #[test]
    fn test_compute_split_slash_31() {
        let split = compute_split(Ipv4Addr::new(10, 0, 0, 7), 30, 31).unwrap();
        assert_eq!(split.subnets_created, 2);
        assert_eq!(split.addresses_in_subnet, 2);
        assert_eq!(split.usable_hosts, 0);
        assert_eq!(split.network, Ipv4Addr::new(10, 0, 0, 6));
        assert_eq!(split.broadcast, Ipv4Addr::new(10, 0, 0, 7));
        assert_eq!(split.first_host, HostAddr::NotApplicable);
        assert_eq!(split.last_host, HostAddr::NotApplicable);
    }

    #[test]
    fn test_compute_split_slash_30() {
        let split = compute_split(Ipv4Addr::new(10, 0, 0, 7), 30, 30).unwrap();
        assert_eq!(split.subnet_bits, 0);
        assert_eq!(split.subnets_created, 1);
        assert_eq!(split.addresses_in_subnet, 4);
        assert_eq!(split.usable_hosts, 2);
        assert_eq!(split.first_host, HostAddr::Addr(Ipv4Addr::new(10, 0, 0, 5)));
        assert_eq!(split.last_host, HostAddr::Addr(Ipv4Addr::new(10, 0, 0, 6)));
    }

    #[test]
    fn test_compute_split_slash_0() {
        let split = compute_split(Ipv4Addr::new(172, 16, 5, 4), 0, 0).unwrap();
        assert_eq!(split.subnets_created, 1);
        assert_eq!(split.addresses_in_subnet, 1u64 << 32);
        assert_eq!(split.usable_hosts, (1u64 << 32) - 2);
        assert_eq!(split.network, Ipv4Addr::UNSPECIFIED);
        assert_eq!(split.broadcast, Ipv4Addr::BROADCAST);
        assert_eq!(split.first_host, HostAddr::Addr(Ipv4Addr::new(0, 0, 0, 1)));
        assert_eq!(
            split.last_host,
            HostAddr::Addr(Ipv4Addr::new(255, 255, 255, 254))
        );
        assert_eq!(split.new_mask_dotted, "0.0.0.0");

        let split = compute_split(Ipv4Addr::new(172, 16, 5, 4), 0, 32).unwrap();
        assert_eq!(split.subnets_created, 1u64 << 32);
        assert_eq!(split.addresses_in_subnet, 1);
    }

    #[test]
    fn test_compute_split_less_specific() {
        assert_eq!(
            compute_split(Ipv4Addr::new(192, 168, 1, 10), 24, 20).unwrap_err(),
            RangeError::LessSpecific { current: 24, new: 20 }
        );
    }

    #[test]
    fn test_compute_split_out_of_range() {
        let ip = Ipv4Addr::new(192, 168, 1, 10);
        assert_eq!(
            compute_split(ip, 33, 33).unwrap_err(),
            RangeError::PrefixOutOfRange {
                field: Field::CurrentMask,
                prefix: 33
            }
        );
        assert_eq!(
            compute_split(ip, 24, 40).unwrap_err(),
            RangeError::PrefixOutOfRange {
                field: Field::NewMask,
                prefix: 40
            }
        );
    }
}
