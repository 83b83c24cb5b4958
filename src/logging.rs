//! log4rs setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const FALLBACK_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Stderr only, warnings and up. Used when no log4rs file is present.
fn fallback_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    Ok(config)
}

/// Initialize logging from `path`, or the stderr fallback if it doesn't exist.
pub fn init(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", path.display()))?;
        log::info!("Logging configured from {}", path.display());
    } else {
        log4rs::init_config(fallback_config()?)?;
        log::debug!("No log config at {}, using stderr", path.display());
    }
    Ok(())
}
