pub mod comments;
pub mod config;
