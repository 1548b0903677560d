use indicatif::ProgressBar;
use tracing::debug;

use super::error::Result;
use super::record::CommentRecord;
use crate::infra::youtube::CommentThreadsApi;

/// Fetch every top-level comment of a video, following continuation tokens
/// until the API reports no further page. Replies are not fetched.
///
/// The running count is shown on `progress`; any API error discards what
/// was collected so far.
pub async fn get_video_comments(
    api: &(impl CommentThreadsApi + ?Sized),
    video_id: &str,
    progress: &ProgressBar,
) -> Result<Vec<CommentRecord>> {
    let mut comments = Vec::new();
    let mut page_token: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = api
            .list_comment_threads(video_id, page_token.as_deref())
            .await?;
        pages += 1;

        let next = page.continuation().map(str::to_string);
        comments.extend(page.items.into_iter().map(CommentRecord::from));
        debug!(
            pages,
            total = comments.len(),
            has_next = next.is_some(),
            "page fetched"
        );
        progress.set_message(format!("Fetched {} comments...", comments.len()));

        match next {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    Ok(comments)
}
