//! Terminal output for split results and conversions.

use crate::error::CalcError;
use crate::models::SubnetDescriptor;
use colored::Colorize;
use std::net::Ipv4Addr;

const LABEL_WIDTH: usize = 28;

/// Format a label left-aligned and padded to `width`, followed by ": ".
///
/// # Arguments
/// * `label` - The label to format
/// * `width` - The minimum width of the label column
pub fn format_label<T: ToString>(label: T, width: usize) -> String {
    let label = label.to_string();
    format!("{label:<width$}: ")
}

fn line(label: &str, value: impl ToString) -> String {
    format!(
        "{}{}\n",
        format_label(label, LABEL_WIDTH),
        value.to_string().bold()
    )
}

/// Render the split report, one labelled value per line.
pub fn render_split(split: &SubnetDescriptor) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "=== Results ===".green()));
    out.push_str(&line("Subnet bits", split.subnet_bits));
    out.push_str(&line("Subnets created", split.subnets_created));
    out.push_str(&line("Addresses in subnet", split.addresses_in_subnet));
    out.push_str(&line("Usable hosts in subnet", split.usable_hosts));
    out.push_str(&line("Subnet address", split.network));
    out.push_str(&line("First host address", split.first_host));
    out.push_str(&line("Last host address", split.last_host));
    out.push_str(&line("Broadcast address", split.broadcast));
    out.push_str(&line(
        "New mask",
        format!("{} (/{})", split.new_mask_dotted, split.new_mask),
    ));
    out
}

pub fn render_binary(binary: &str) -> String {
    line("Binary", binary)
}

pub fn render_ip(ip: Ipv4Addr) -> String {
    line("IP address", ip)
}

pub fn render_error(err: &CalcError) -> String {
    format!("{} {}\n", "Error:".on_red(), err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::compute_split;

    #[test]
    fn test_format_label_short() {
        assert_eq!(format_label("test", 8), "test    : ");
    }

    #[test]
    fn test_format_label_long() {
        assert_eq!(format_label("long_label", 5), "long_label: ");
    }

    #[test]
    fn test_render_split() {
        colored::control::set_override(false);
        let split = compute_split(Ipv4Addr::new(192, 168, 1, 10), 24, 32).unwrap();
        let out = render_split(&split);
        assert!(out.starts_with("=== Results ===\n"));
        assert!(out.contains(&format!(
            "{}255.255.255.255 (/32)\n",
            format_label("New mask", LABEL_WIDTH)
        )));
        assert!(out.contains(&format!("{}N/A\n", format_label("First host address", LABEL_WIDTH))));
        assert!(out.contains(&format!("{}256\n", format_label("Subnets created", LABEL_WIDTH))));
        assert_eq!(out.lines().count(), 10);
    }

    #[test]
    fn test_render_error() {
        colored::control::set_override(false);
        let err: CalcError = crate::error::RangeError::LessSpecific { current: 24, new: 20 }.into();
        assert_eq!(
            render_error(&err),
            "Error: new mask /20 must be at least as specific as the current mask /24\n"
        );
    }
}
