//! Centralized reader for the environment variables this tool honours.
//!
//! Variable names are private constants here; the rest of the crate reads
//! values through the `EnvVars` snapshot.

const API_KEY: &str = "YOUTUBE_API_KEY";
const BASE_URL: &str = "YT_COMMENTS_BASE_URL";

/// Snapshot of the relevant environment variables at load time.
pub struct EnvVars {
    /// YouTube Data API key.
    pub api_key: Option<String>,

    /// Override for the API base URL (mainly for local mocks).
    pub base_url: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl EnvVars {
    /// Read the variables from the current process.
    pub fn load() -> Self {
        Self {
            api_key: non_empty_var(API_KEY),
            base_url: non_empty_var(BASE_URL),
        }
    }

    /// Name of the API key variable, for user-facing messages.
    pub fn api_key_name() -> &'static str {
        API_KEY
    }
}
