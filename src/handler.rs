//! Entry point for collaborators that work with raw text fields.
//!
//! [`SubnetHandler`] holds no state. Build it once at startup and pass it by
//! copy to whatever serves requests or prompts.

use crate::error::{CalcError, Field};
use crate::models::{decode, from_binary_digits, parse_mask, to_binary_digits, SubnetDescriptor};
use crate::processing::compute_split;
use std::net::Ipv4Addr;

#[derive(Debug, Default, Clone, Copy)]
pub struct SubnetHandler;

impl SubnetHandler {
    pub fn new() -> Self {
        SubnetHandler
    }

    /// Validate the three fields and compute the split.
    ///
    /// # Arguments
    /// * `ip` - host address in dotted-decimal form
    /// * `current_mask` - current mask as prefix length or dotted mask
    /// * `new_mask` - new mask as prefix length or dotted mask
    pub fn calculate(
        &self,
        ip: &str,
        current_mask: &str,
        new_mask: &str,
    ) -> Result<SubnetDescriptor, CalcError> {
        log::debug!("calculate(ip={ip}, current_mask={current_mask}, new_mask={new_mask})");
        let address = self.parse_address(ip)?;
        let current = parse_mask(current_mask).map_err(|e| CalcError::format(Field::CurrentMask, e))?;
        let new = parse_mask(new_mask).map_err(|e| CalcError::format(Field::NewMask, e))?;
        Ok(compute_split(address, current, new)?)
    }

    pub fn ip_to_binary(&self, ip: &str) -> Result<String, CalcError> {
        let address = self.parse_address(ip)?;
        Ok(to_binary_digits(address))
    }

    pub fn binary_to_ip(&self, binary: &str) -> Result<Ipv4Addr, CalcError> {
        from_binary_digits(binary).map_err(|e| CalcError::format(Field::Binary, e))
    }

    fn parse_address(&self, ip: &str) -> Result<Ipv4Addr, CalcError> {
        decode(ip).map_err(|e| CalcError::format(Field::Address, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FormatError, RangeError};
    use crate::models::HostAddr;

    #[test]
    fn test_calculate_mixed_mask_forms() {
        let handler = SubnetHandler::new();
        let split = handler
            .calculate("192.168.1.10", "255.255.255.0", "26")
            .unwrap();
        assert_eq!(split.network, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(split.last_host, HostAddr::Addr(Ipv4Addr::new(192, 168, 1, 62)));

        let same = handler
            .calculate("192.168.1.10", "24", "255.255.255.192")
            .unwrap();
        assert_eq!(split, same);
    }

    #[test]
    fn test_calculate_errors_name_field() {
        let handler = SubnetHandler::new();
        let err = handler.calculate("999.1.1.1", "24", "26").unwrap_err();
        assert_eq!(err.field(), Some(Field::Address));

        let err = handler.calculate("10.0.0.1", "255.255.255.1", "26").unwrap_err();
        assert_eq!(
            err,
            CalcError::format(
                Field::CurrentMask,
                FormatError::NonContiguousMask {
                    input: "255.255.255.1".to_string()
                }
            )
        );

        let err = handler.calculate("10.0.0.1", "24", "x").unwrap_err();
        assert_eq!(err.field(), Some(Field::NewMask));

        let err = handler.calculate("10.0.0.1", "24", "20").unwrap_err();
        assert_eq!(
            err,
            CalcError::Range(RangeError::LessSpecific { current: 24, new: 20 })
        );
    }

    #[test]
    fn test_binary_conversions() {
        let handler = SubnetHandler::new();
        assert_eq!(
            handler.ip_to_binary("10.0.0.1").unwrap(),
            "00001010000000000000000000000001"
        );
        assert_eq!(
            handler
                .binary_to_ip("00001010000000000000000000000001")
                .unwrap(),
            Ipv4Addr::new(10, 0, 0, 1)
        );
        assert_eq!(
            handler.binary_to_ip("0101").unwrap_err().field(),
            Some(Field::Binary)
        );
        assert_eq!(
            handler.ip_to_binary("10.0.0").unwrap_err().field(),
            Some(Field::Address)
        );
    }

    #[test]
    fn test_handler_shared_across_threads() {
        let handler = SubnetHandler::new();
        let workers: Vec<_> = (24..=32u8)
            .map(|prefix| {
                std::thread::spawn(move || {
                    handler
                        .calculate("172.16.9.77", "16", &prefix.to_string())
                        .map(|split| split.addresses_in_subnet)
                })
            })
            .collect();

        for (worker, prefix) in workers.into_iter().zip(24..=32u32) {
            let addresses = worker.join().unwrap().unwrap();
            assert_eq!(addresses, 1u64 << (32 - prefix));
        }
    }
}
