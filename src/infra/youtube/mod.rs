//! YouTube Data API v3 access.

mod client;
mod error;
#[cfg(test)]
pub mod mock;
mod models;

pub use client::{CommentThreadsApi, YouTubeClient};
pub use error::YouTubeError;
pub use models::CommentThread;
