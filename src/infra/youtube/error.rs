//! YouTube Data API error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum YouTubeError {
    #[error("{}", format_api_error(.status, .message, .reasons))]
    Api {
        status: u16,
        message: String,
        reasons: Vec<String>,
    },

    #[error("Request to YouTube API failed: {}", with_causes(.0))]
    Request(reqwest::Error),

    #[error("Failed to decode YouTube API response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, YouTubeError>;

impl From<reqwest::Error> for YouTubeError {
    /// The request URL carries the API key, so it is stripped here.
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.without_url())
    }
}

/// Render an error followed by its `source()` chain, "outer: inner: root".
fn with_causes(err: &(dyn std::error::Error + 'static)) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // Some wrappers already repeat their cause in Display.
        if !msg.ends_with(&text) {
            msg.push_str(": ");
            msg.push_str(&text);
        }
        source = cause.source();
    }
    msg
}

fn format_api_error(status: &u16, message: &str, reasons: &[String]) -> String {
    let mut msg = format!("YouTube API error: {message} (HTTP {status})");
    if !reasons.is_empty() {
        msg.push_str(&format!(" [{}]", reasons.join(", ")));
    }
    msg
}
