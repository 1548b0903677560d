//! wiremock-based YouTube Data API mock server for testing.
//!
//! ```ignore
//! let mock = YouTubeMockServer::start().await;
//!
//! // First page, followed by a continuation
//! mock.page("AbCdEfGhIjK").items(threads(0, 100)).next_page_token("p2").mount().await;
//! // Last page
//! mock.page("AbCdEfGhIjK").page_token("p2").items(threads(100, 37)).mount().await;
//!
//! // Any request fails
//! mock.error(403, "quota", "quotaExceeded").await;
//! ```

use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client::YouTubeClient;
use crate::shared::config::ApiSettings;

pub const TEST_API_KEY: &str = "test-key";

/// Create a mock `commentThread` resource JSON object.
pub fn comment_thread(
    text: &str,
    likes: u64,
    author: &str,
    published_at: &str,
) -> serde_json::Value {
    json!({
        "kind": "youtube#commentThread",
        "id": format!("thread-{text}"),
        "snippet": {
            "totalReplyCount": 0,
            "topLevelComment": {
                "kind": "youtube#comment",
                "snippet": {
                    "textDisplay": text,
                    "textOriginal": text,
                    "likeCount": likes,
                    "authorDisplayName": author,
                    "authorChannelUrl": format!("http://www.youtube.com/{author}"),
                    "publishedAt": published_at
                }
            }
        }
    })
}

/// `count` distinct threads numbered from `start`.
pub fn threads(start: usize, count: usize) -> Vec<serde_json::Value> {
    (start..start + count)
        .map(|i| {
            comment_thread(
                &format!("comment {i}"),
                i as u64,
                &format!("@user{i}"),
                "2024-01-01T00:00:00Z",
            )
        })
        .collect()
}

pub struct YouTubeMockServer {
    pub server: MockServer,
}

impl YouTubeMockServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Client pointed at this server.
    pub fn client(&self) -> YouTubeClient {
        let settings = ApiSettings {
            key: TEST_API_KEY.to_string(),
            base_url: self.server.uri(),
            page_size: 100,
        };
        YouTubeClient::new(settings).unwrap()
    }

    /// Start building a page response for `video_id`.
    pub fn page<'a>(&'a self, video_id: &'a str) -> PageMock<'a> {
        PageMock {
            server: &self.server,
            video_id,
            page_token: None,
            items: Vec::new(),
            next_page_token: None,
        }
    }

    /// Every request answers with a Google error envelope.
    pub async fn error(&self, status: u16, message: &str, reason: &str) {
        Mock::given(method("GET"))
            .and(path("/commentThreads"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": {
                    "code": status,
                    "message": message,
                    "errors": [{"message": message, "domain": "youtube", "reason": reason}]
                }
            })))
            .mount(&self.server)
            .await;
    }

    /// Every request answers with `body` as-is.
    pub async fn raw_body(&self, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path("/commentThreads"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }
}

pub struct PageMock<'a> {
    server: &'a MockServer,
    video_id: &'a str,
    page_token: Option<&'a str>,
    items: Vec<serde_json::Value>,
    next_page_token: Option<&'a str>,
}

impl<'a> PageMock<'a> {
    /// Match only requests carrying this continuation token.
    /// Without it, the mock matches the first-page request (no token).
    pub fn page_token(mut self, token: &'a str) -> Self {
        self.page_token = Some(token);
        self
    }

    pub fn items(mut self, items: Vec<serde_json::Value>) -> Self {
        self.items = items;
        self
    }

    pub fn next_page_token(mut self, token: &'a str) -> Self {
        self.next_page_token = Some(token);
        self
    }

    /// Mount the mock, expecting it to be hit exactly once.
    pub async fn mount(self) {
        let mut body = json!({
            "kind": "youtube#commentThreadListResponse",
            "pageInfo": {"totalResults": self.items.len(), "resultsPerPage": 100},
            "items": self.items,
        });
        if let Some(next) = self.next_page_token {
            body["nextPageToken"] = json!(next);
        }

        let mock = Mock::given(method("GET"))
            .and(path("/commentThreads"))
            .and(query_param("part", "snippet"))
            .and(query_param("videoId", self.video_id))
            .and(query_param("maxResults", "100"))
            .and(query_param("key", TEST_API_KEY));
        let mock = match self.page_token {
            Some(token) => mock.and(query_param("pageToken", token)),
            None => mock.and(query_param_is_missing("pageToken")),
        };

        mock.respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(self.server)
            .await;
    }
}
