//! YouTube Data API client implementation using reqwest.

use serde::Deserialize;
use tracing::debug;

use super::error::{Result, YouTubeError};
use super::models::CommentThreadPage;
use crate::shared::config::ApiSettings;

/// Read access to the `commentThreads` collection.
#[async_trait::async_trait]
pub trait CommentThreadsApi: Send + Sync {
    /// Fetch one page of top-level comment threads for a video.
    /// `page_token` is the continuation token of the previous page.
    async fn list_comment_threads(
        &self,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<CommentThreadPage>;
}

/// Google API error envelope: `{"error": {"code", "message", "errors": [...]}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    reason: Option<String>,
}

/// Production implementation over HTTPS.
pub struct YouTubeClient {
    http: reqwest::Client,
    settings: ApiSettings,
}

impl YouTubeClient {
    pub fn new(settings: ApiSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("yt-comments/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, settings })
    }

    fn endpoint(&self) -> String {
        format!("{}/commentThreads", self.settings.base_url)
    }
}

#[async_trait::async_trait]
impl CommentThreadsApi for YouTubeClient {
    async fn list_comment_threads(
        &self,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<CommentThreadPage> {
        debug!(video_id, page_token, "requesting comment threads page");

        let page_size = self.settings.page_size.to_string();
        let mut request = self.http.get(self.endpoint()).query(&[
            ("part", "snippet"),
            ("videoId", video_id),
            ("maxResults", page_size.as_str()),
            ("key", self.settings.key.as_str()),
        ]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Build an `Api` error from a non-success response, falling back to the
/// HTTP reason phrase when the body is not a Google error envelope.
fn api_error(status: reqwest::StatusCode, body: &str) -> YouTubeError {
    let (message, reasons) = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => (
            envelope.error.message,
            envelope
                .error
                .errors
                .into_iter()
                .filter_map(|e| e.reason)
                .collect(),
        ),
        Err(_) => (String::new(), Vec::new()),
    };

    let message = if message.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        message
    };

    YouTubeError::Api {
        status: status.as_u16(),
        message,
        reasons,
    }
}
