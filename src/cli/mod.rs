//! Command line front end.
//!
//! - [`Args`] - clap argument definitions
//! - [`prompt`] - interactive question/answer flow

mod prompt;

pub use prompt::run_prompt;

use crate::config::{Config, OutputFormat};
use crate::handler::SubnetHandler;
use crate::output::{render, Report};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "subnet-calc", version, about = "IPv4 subnet calculator")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// log4rs configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Split the network of IP at CURRENT_MASK into NEW_MASK subnets
    Split {
        ip: String,
        /// Prefix length (24, /24) or dotted mask (255.255.255.0)
        current_mask: String,
        /// Prefix length (26, /26) or dotted mask (255.255.255.192)
        new_mask: String,
    },
    /// Convert a dotted-decimal address to 32 binary digits
    ToBinary { ip: String },
    /// Convert 32 binary digits to a dotted-decimal address
    FromBinary { binary: String },
}

impl Args {
    /// Command line flags take precedence over the environment.
    pub fn apply(&self, mut config: Config) -> Config {
        if self.json {
            config.output = OutputFormat::Json;
        }
        if self.no_color {
            config.color = false;
        }
        if let Some(path) = &self.log_config {
            config.log_config = path.clone();
        }
        config
    }
}

/// Accept masks typed as "/24" as well as "24" or a dotted mask.
pub fn normalize_mask(input: &str) -> &str {
    let input = input.trim();
    input.strip_prefix('/').unwrap_or(input)
}

/// Run one command, or the interactive prompt when no command is given.
///
/// Returns `Ok(false)` when the input was rejected; the reason has already
/// been written to `out`.
pub fn run<R: BufRead, W: Write, E: Write>(
    command: Option<&Command>,
    handler: SubnetHandler,
    format: OutputFormat,
    input: &mut R,
    out: &mut W,
    err: &mut E,
) -> Result<bool, Box<dyn Error>> {
    let Some(command) = command else {
        return run_prompt(handler, format, input, out, err);
    };

    log::info!("Running {command:?}");
    let result = match command {
        Command::Split {
            ip,
            current_mask,
            new_mask,
        } => handler
            .calculate(
                ip.trim(),
                normalize_mask(current_mask),
                normalize_mask(new_mask),
            )
            .map(|split| render(Report::Split(&split), format)),
        Command::ToBinary { ip } => handler
            .ip_to_binary(ip.trim())
            .map(|binary| render(Report::Binary(&binary), format)),
        Command::FromBinary { binary } => handler
            .binary_to_ip(binary.trim())
            .map(|ip| render(Report::Ip(ip), format)),
    };

    match result {
        Ok(rendered) => {
            write!(out, "{}", rendered?)?;
            Ok(true)
        }
        Err(err) => {
            log::warn!("Rejected input: {err}");
            write!(out, "{}", render(Report::Error(&err), format)?)?;
            Ok(false)
        }
    }
}
