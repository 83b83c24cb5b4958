//! Output formatting for calculation results.
//!
//! - [`json`] - JSON bodies, same field names as the web API
//! - [`terminal`] - labelled terminal report with colors

pub mod json;
pub mod terminal;

use crate::config::OutputFormat;
use crate::error::CalcError;
use crate::models::SubnetDescriptor;
use std::error::Error;
use std::net::Ipv4Addr;

/// Something the command line can print.
#[derive(Debug)]
pub enum Report<'a> {
    Split(&'a SubnetDescriptor),
    Binary(&'a str),
    Ip(Ipv4Addr),
    Error(&'a CalcError),
}

/// Render a report in the configured format.
pub fn render(report: Report, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    let out = match format {
        OutputFormat::Text => match report {
            Report::Split(split) => terminal::render_split(split),
            Report::Binary(binary) => terminal::render_binary(binary),
            Report::Ip(ip) => terminal::render_ip(ip),
            Report::Error(err) => terminal::render_error(err),
        },
        OutputFormat::Json => {
            let mut out = match report {
                Report::Split(split) => json::render_split(split)?,
                Report::Binary(binary) => json::render_binary(binary)?,
                Report::Ip(ip) => json::render_ip(ip)?,
                Report::Error(err) => json::render_error(err)?,
            };
            out.push('\n');
            out
        }
    };
    Ok(out)
}
