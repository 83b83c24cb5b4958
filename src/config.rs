//! Runtime configuration from the environment (and `.env` via dotenv).
//!
//! | Variable                 | Default      |
//! |--------------------------|--------------|
//! | `SUBNET_CALC_OUTPUT`     | `text`       |
//! | `SUBNET_CALC_LOG_CONFIG` | `log4rs.yml` |
//! | `SUBNET_CALC_COLOR`      | `true`       |

use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_OUTPUT: &str = "SUBNET_CALC_OUTPUT";
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";
pub const ENV_COLOR: &str = "SUBNET_CALC_COLOR";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format {other:?}, expected text or json")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output: OutputFormat,
    pub log_config: PathBuf,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputFormat::Text,
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            color: true,
        }
    }
}

impl Config {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup, unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(output) = lookup(ENV_OUTPUT) {
            config.output = output.parse().map_err(|e| format!("{ENV_OUTPUT}: {e}"))?;
        }
        if let Some(path) = lookup(ENV_LOG_CONFIG).filter(|p| !p.trim().is_empty()) {
            config.log_config = PathBuf::from(path);
        }
        if let Some(color) = lookup(ENV_COLOR) {
            config.color = parse_bool(&color).ok_or_else(|| {
                format!("{ENV_COLOR}: expected true or false, got {color:?}")
            })?;
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
