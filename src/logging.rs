use std::{fs::OpenOptions, path::Path};

use anyhow::{Context, Result};
use log::LevelFilter;

/// `RUST_LOG` overrides the defaults. With a `log_file`, records are appended
/// there so they stay off the terminal.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, LevelFilter::Warn)
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Info)
        .parse_default_env();

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder
        .try_init()
        .with_context(|| "Failed to initialise logger")
}
