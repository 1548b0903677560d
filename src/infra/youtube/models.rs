//! Response shapes of the `commentThreads.list` endpoint.
//!
//! Only the fields consumed by the exporter are modelled. Scalar fields the
//! API omits fall back to their type's empty value.

use serde::Deserialize;

/// One page of `commentThreads.list`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadPage {
    #[serde(default)]
    pub items: Vec<CommentThread>,
    pub next_page_token: Option<String>,
}

impl CommentThreadPage {
    /// Continuation token for the next page, if any.
    pub fn continuation(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct CommentThread {
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
pub struct TopLevelComment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    #[serde(default)]
    pub text_display: String,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub author_display_name: String,
    #[serde(default)]
    pub author_channel_url: String,
    #[serde(default)]
    pub published_at: String,
}
