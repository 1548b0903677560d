mod cli;
mod commands;
mod infra;
mod shared;

use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, Commands};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let Cli { command } = Cli::parse();

    // Before the async runtime exists, so setting variables is sound.
    if let Err(e) = shared::dotenv::load_dotenv() {
        warn!(error = %e, "failed to read .env");
    }

    let result = match command {
        Commands::Fetch(args) => args.run(),
        Commands::Config(config_cmd) => config_cmd.run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
