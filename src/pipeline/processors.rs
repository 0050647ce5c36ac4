//! Turn one raw page body into (next token, domain items).

use log::debug;

use crate::api::{
    COMMENT_THREADS_ENDPOINT, CommentThreadListPage, Paged, SEARCH_ENDPOINT, SearchListPage,
    decode_page,
};
use crate::error::HarvestError;
use crate::utils::config::COMMENT_PREVIEW_CHARS;
use crate::{Comment, Video};

/// (next page token, items of this page).
pub type ProcessedPage<T> = (Option<String>, Vec<T>);

/// Decode a `search.list` page into videos.
pub fn process_search_page(body: &str) -> Result<ProcessedPage<Video>, HarvestError> {
    let page: SearchListPage = decode_page(SEARCH_ENDPOINT, body)?;
    debug!("Received video search response ({} items)", page.items.len());
    let next = page.continuation();
    let videos = page
        .items
        .into_iter()
        .map(|item| {
            debug!("Found video {}", item.id.video_id);
            Video {
                video_id: item.id.video_id,
                video_title: item.snippet.title,
            }
        })
        .collect();
    Ok((next, videos))
}

/// Decode a `commentThreads.list` page into comments on `video`.
pub fn process_comment_page(
    body: &str,
    video: &Video,
) -> Result<ProcessedPage<Comment>, HarvestError> {
    let page: CommentThreadListPage = decode_page(COMMENT_THREADS_ENDPOINT, body)?;
    let next = page.continuation();
    let comments = page
        .items
        .into_iter()
        .map(|thread| {
            let snippet = thread.snippet.top_level_comment.snippet;
            debug!(
                "Comment: {}... for {}",
                preview(&snippet.text_display),
                video.video_title
            );
            Comment::on_video(video, snippet.author_display_name, snippet.text_display)
        })
        .collect();
    Ok((next, comments))
}

/// First [`COMMENT_PREVIEW_CHARS`] characters, cut on a char boundary.
fn preview(text: &str) -> &str {
    match text.char_indices().nth(COMMENT_PREVIEW_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
