// src/cli/mod.rs
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use crate::core::config::Config;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Random password generator with a strength rating", long_about = None)]
pub struct Args {
    /// Address to bind the web server to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind the web server to
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<LevelFilter>,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Command to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Args {
    // Command-line values win over the environment
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.web_address = host.clone();
        }
        if let Some(port) = self.port {
            config.web_port = port;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
    }
}
