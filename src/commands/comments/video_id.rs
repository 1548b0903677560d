use lazy_regex::regex_captures;

use super::error::{CommentsError, Result};

/// Extract the 11-character video ID that follows `v=` in a watch URL.
///
/// Only the `v=` query form is recognised; short links such as
/// `youtu.be/<id>` are rejected.
pub fn extract_video_id(url: &str) -> Result<String> {
    regex_captures!(r"v=([a-zA-Z0-9_-]{11})", url)
        .map(|(_, id)| id.to_string())
        .ok_or_else(|| CommentsError::InvalidUrl(url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::watch_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ", "dQw4w9WgXcQ")]
    #[case::example_host("https://example.com/watch?v=AbCdEfGhIjK", "AbCdEfGhIjK")]
    #[case::extra_params("https://www.youtube.com/watch?v=a_b-c_d-e_f&t=42s", "a_b-c_d-e_f")]
    #[case::not_first_param("https://www.youtube.com/watch?list=PL1&v=AbCdEfGhIjK", "AbCdEfGhIjK")]
    #[case::longer_token_truncated("https://www.youtube.com/watch?v=AbCdEfGhIjKLMN", "AbCdEfGhIjK")]
    #[case::bare_marker("v=01234567890", "01234567890")]
    fn test_extract_video_id(#[case] url: &str, #[case] expected: &str) {
        assert_eq!(extract_video_id(url).unwrap(), expected);
    }

    #[rstest]
    #[case::short_link("https://youtu.be/dQw4w9WgXcQ")]
    #[case::too_short("https://www.youtube.com/watch?v=short")]
    #[case::invalid_chars("https://www.youtube.com/watch?v=abc$%^&*()xy")]
    #[case::empty("")]
    #[case::no_marker("https://www.youtube.com/")]
    fn test_extract_video_id_invalid(#[case] url: &str) {
        let err = extract_video_id(url).unwrap_err();
        assert!(matches!(&err, CommentsError::InvalidUrl(u) if u == url));
        assert_eq!(
            err.to_string(),
            "Invalid YouTube URL. Video ID could not be extracted."
        );
    }
}
