//! JSON output, shaped like the calculator's web API responses.

use crate::error::CalcError;
use crate::models::SubnetDescriptor;
use serde_json::json;
use std::net::Ipv4Addr;

pub fn render_split(split: &SubnetDescriptor) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(split)
}

pub fn render_binary(binary: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({ "binary": binary }))
}

pub fn render_ip(ip: Ipv4Addr) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({ "ip": ip }))
}

/// Error body, `{"error": "<message>"}`.
pub fn render_error(err: &CalcError) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({ "error": err.to_string() }))
}
