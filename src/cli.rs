use clap::{Parser, Subcommand};

use crate::commands::comments::FetchArgs;
use crate::commands::config::ConfigCommands;

#[derive(Parser)]
#[command(
    name = "yt-comments",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Export the top-level comments of a video to CSV
    Fetch(FetchArgs),

    /// Configuration file tools
    #[command(subcommand)]
    Config(ConfigCommands),
}
