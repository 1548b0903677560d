use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::infra::youtube::YouTubeError;

/// Failures of a single export run.
#[derive(Error, Debug)]
pub enum CommentsError {
    #[error("Invalid YouTube URL. Video ID could not be extracted.")]
    InvalidUrl(String),

    #[error(transparent)]
    Api(#[from] YouTubeError),

    #[error("Failed to write {path}: {source}")]
    FileWrite { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, CommentsError>;
