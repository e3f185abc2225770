// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialised: {0}")]
    AlreadyInitialised(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Build the env_logger backend for `config`.
///
/// `RUST_LOG` still takes precedence over the configured level so individual
/// modules can be turned up without touching the service configuration.
pub fn builder(config: &Config) -> Result<env_logger::Builder> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if let Some(path) = &config.log_file {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    Ok(builder)
}

pub fn init(config: &Config) -> Result<()> {
    builder(config)?.try_init()?;
    log::debug!(
        "Logging initialised at {} ({})",
        config.log_level,
        config
            .log_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stderr".to_string())
    );
    Ok(())
}
