use serde::{Deserialize, Serialize};

use crate::infra::youtube::CommentThread;

/// Column names of the exported file, in output order.
pub const HEADERS: [&str; 5] = ["Comment", "Likes", "Author", "Author URL", "Published At"];

/// One top-level comment, flattened for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    #[serde(rename = "Comment")]
    pub comment: String,
    #[serde(rename = "Likes")]
    pub likes: u64,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Author URL")]
    pub author_url: String,
    /// ISO-8601 timestamp, kept as text.
    #[serde(rename = "Published At")]
    pub published_at: String,
}

impl From<CommentThread> for CommentRecord {
    fn from(thread: CommentThread) -> Self {
        let snippet = thread.snippet.top_level_comment.snippet;
        Self {
            comment: snippet.text_display,
            likes: snippet.like_count,
            author: normalize_author(&snippet.author_display_name),
            author_url: snippet.author_channel_url,
            published_at: snippet.published_at,
        }
    }
}

/// Drop the leading `@` of channel handles ("@jdoe" -> "jdoe").
fn normalize_author(name: &str) -> String {
    name.trim_start_matches('@').to_string()
}
