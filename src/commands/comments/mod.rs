//! Export the top-level comments of a video to CSV.
//!
//! Pipeline: extract video ID -> page through `commentThreads` -> sort ->
//! write CSV. Every failure after startup ends the run with a single
//! "An error occurred" line.

mod error;
mod export;
mod fetcher;
mod prompt;
mod record;
mod sort;
mod video_id;

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::infra::youtube::{CommentThreadsApi, YouTubeClient};
use crate::shared::config::load_config;
use crate::shared::env_var::EnvVars;
use error::Result;
use export::save_to_csv;
use fetcher::get_video_comments;
use prompt::{RunOptions, collect_options};
use sort::sort_comments;
use video_id::extract_video_id;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct FetchArgs {
    /// Video URL containing `v=<id>`. Prompts for all options when omitted.
    pub url: Option<String>,

    /// Column to sort by: Comment, Likes, Author, Author URL or Published At
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort in ascending order (default: descending)
    #[arg(long)]
    pub ascending: bool,

    /// Output file (default: export.file_name from the config, youtube_comments.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl FetchArgs {
    pub fn run(&self) -> anyhow::Result<()> {
        let config = load_config()?;
        // A missing API key aborts before anything is asked.
        let settings = config.api_settings(&EnvVars::load())?;

        let options = collect_options(
            self.url.as_deref(),
            self.sort_by.as_deref(),
            self.ascending,
            &mut io::stdin().lock(),
            &mut io::stdout(),
        )?;
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.export.file_name));

        let client = YouTubeClient::new(settings)?;
        run_with_boundary(&client, &options, &output);
        Ok(())
    }
}

#[tokio::main]
async fn run_with_boundary(api: &YouTubeClient, options: &RunOptions, output: &Path) {
    run_reporting(api, options, output, &mut io::stdout()).await;
}

/// Run the export, writing progress and any failure to `out`.
/// Errors end the run with a single "An error occurred" line.
pub async fn run_reporting(
    api: &(impl CommentThreadsApi + ?Sized),
    options: &RunOptions,
    output: &Path,
    out: &mut impl Write,
) -> Option<usize> {
    match run_pipeline(api, options, output, out).await {
        Ok(rows) => Some(rows),
        Err(e) => {
            debug!(error = ?e, "export failed");
            say(out, format_args!("An error occurred: {e}"));
            None
        }
    }
}

/// Run the whole export, writing progress to `out`. Returns the number of rows written.
pub async fn run_pipeline(
    api: &(impl CommentThreadsApi + ?Sized),
    options: &RunOptions,
    output: &Path,
    out: &mut impl Write,
) -> Result<usize> {
    say(out, "Extracting video ID from URL...");
    let video_id = extract_video_id(&options.url)?;
    say(out, format_args!("Video ID: {video_id}"));

    say(out, "Fetching comments...");
    let spinner = fetch_spinner();
    let comments = get_video_comments(api, &video_id, &spinner).await;
    spinner.finish_and_clear();
    let comments = comments?;
    say(out, format_args!("Fetched {} comments.", comments.len()));

    say(out, "Sorting comments...");
    let sorted = sort_comments(&comments, &options.sort_by, options.ascending);

    let file_name = output.display();
    say(out, format_args!("Saving comments to {file_name}..."));
    save_to_csv(&sorted, output)?;
    say(out, format_args!("Comments saved to '{file_name}' successfully!"));

    info!(%video_id, rows = sorted.len(), sort_by = %options.sort_by, "export finished");
    Ok(sorted.len())
}

// Progress output is best effort; a closed stdout must not fail the export.
fn say(out: &mut impl Write, line: impl Display) {
    writeln!(out, "{line}").ok();
    out.flush().ok();
}

fn fetch_spinner() -> ProgressBar {
    if !io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
        .template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message("Fetching comments...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
