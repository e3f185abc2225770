use clap::Parser;
use std::path::Path;

mod api;
mod cli;
mod core;
mod generators;
mod logging;
mod models;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    let dotenv_loaded = Path::new(".env").exists() && dotenvy::dotenv().is_ok();

    let args = Args::parse();

    let (mut config, config_warnings) = Config::load();
    args.apply_to(&mut config);

    logging::init(&config)?;
    for warning in &config_warnings {
        log::warn!("{}", warning);
    }
    if dotenv_loaded {
        log::debug!("Loaded .env file");
    }
    log::debug!("Loaded config: {:?}", config);

    match args.command.unwrap_or(CliCommand::Serve) {
        CliCommand::Serve => {
            api::start_server(config).await.map_err(|e| {
                log::error!("Web server failed: {}", e);
                e
            })?;
            log::info!("Web server shut down");
        }
        CliCommand::Generate(generate_args) => {
            let stdout = std::io::stdout();
            cli::handlers::handle_generate(&generate_args, &config, &mut stdout.lock())?;
        }
    }

    Ok(())
}
