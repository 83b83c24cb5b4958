//! Interactive prompt: ask for the host address and both masks, then print
//! the split report.

use super::normalize_mask;
use crate::config::OutputFormat;
use crate::error::{CalcError, Field};
use crate::handler::SubnetHandler;
use crate::models::decode;
use crate::output::{render, Report};
use colored::Colorize;
use std::error::Error;
use std::io::{BufRead, Write};

fn ask<R: BufRead>(
    question: &str,
    input: &mut R,
    out: &mut dyn Write,
) -> Result<String, Box<dyn Error>> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err("Input closed before all values were entered".into());
    }
    Ok(line.trim().to_string())
}

fn reject<W: Write>(err: &CalcError, format: OutputFormat, out: &mut W) -> Result<bool, Box<dyn Error>> {
    log::warn!("Rejected input: {err}");
    write!(out, "{}", render(Report::Error(err), format)?)?;
    if format == OutputFormat::Text {
        writeln!(out, "Please check the values you entered.")?;
    }
    Ok(false)
}

/// Banner and questions go with the report in text mode, and to `err` in
/// JSON mode so `out` carries nothing but the JSON body.
fn prompt_stream<'a>(
    format: OutputFormat,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
) -> &'a mut dyn Write {
    match format {
        OutputFormat::Text => out,
        OutputFormat::Json => err,
    }
}

/// Run one interactive calculation.
///
/// The address is checked as soon as it is entered, before the masks are
/// asked for.
pub fn run_prompt<R: BufRead, W: Write, E: Write>(
    handler: SubnetHandler,
    format: OutputFormat,
    input: &mut R,
    out: &mut W,
    err: &mut E,
) -> Result<bool, Box<dyn Error>> {
    writeln!(
        prompt_stream(format, out, err),
        "\n{}\n",
        "=== IPv4 subnet calculator ===".green()
    )?;

    let ip = ask(
        "Host IP address (e.g. 192.168.1.1): ",
        input,
        prompt_stream(format, out, err),
    )?;
    if let Err(source) = decode(&ip) {
        return reject(&CalcError::format(Field::Address, source), format, out);
    }

    let current_mask = ask(
        "Current subnet mask (e.g. 255.255.255.0 or /24): ",
        input,
        prompt_stream(format, out, err),
    )?;
    let new_mask = ask(
        "New subnet mask (e.g. 255.255.255.128 or /25): ",
        input,
        prompt_stream(format, out, err),
    )?;
    writeln!(prompt_stream(format, out, err))?;

    match handler.calculate(&ip, normalize_mask(&current_mask), normalize_mask(&new_mask)) {
        Ok(split) => {
            log::info!("Computed {} for {ip}", split.cidr());
            write!(out, "{}", render(Report::Split(&split), format)?)?;
            Ok(true)
        }
        Err(err) => reject(&err, format, out),
    }
}
