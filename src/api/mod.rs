//! YouTube Data API v3 access: the two list endpoints the pipeline pages through.

pub mod client;
pub mod responses;

pub use client::YouTubeClient;
pub use responses::{
    CommentThread, CommentThreadListPage, Paged, SearchListPage, SearchResult,
    api_error_message, decode_page,
};

use crate::error::HarvestError;

/// Endpoint labels used in logs and errors.
pub const SEARCH_ENDPOINT: &str = "search.list";
pub const COMMENT_THREADS_ENDPOINT: &str = "commentThreads.list";

/// `search.list` restricted to one channel's videos.
#[derive(Clone, Copy, Debug)]
pub struct SearchQuery<'a> {
    pub channel_id: &'a str,
    pub page_token: Option<&'a str>,
    pub max_results: Option<u32>,
}

impl SearchQuery<'_> {
    /// Query parameters, excluding the developer key.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("part", "snippet".to_string()),
            ("channelId", self.channel_id.to_string()),
            ("type", "video".to_string()),
        ];
        push_paging(&mut params, self.page_token, self.max_results);
        params
    }
}

/// `commentThreads.list` for one video (top-level comments only).
#[derive(Clone, Copy, Debug)]
pub struct CommentThreadsQuery<'a> {
    pub video_id: &'a str,
    pub page_token: Option<&'a str>,
    pub max_results: Option<u32>,
}

impl CommentThreadsQuery<'_> {
    /// Query parameters, excluding the developer key.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("part", "snippet".to_string()),
            ("videoId", self.video_id.to_string()),
        ];
        push_paging(&mut params, self.page_token, self.max_results);
        params
    }
}

fn push_paging(
    params: &mut Vec<(&'static str, String)>,
    page_token: Option<&str>,
    max_results: Option<u32>,
) {
    if let Some(token) = page_token {
        params.push(("pageToken", token.to_string()));
    }
    if let Some(n) = max_results {
        params.push(("maxResults", n.to_string()));
    }
}

/// The two list calls the pipeline needs. Each returns the raw JSON body of one page;
/// decoding happens in the pipeline so every implementation gets the same validation.
pub trait YouTubeApi {
    fn search_videos(&self, query: &SearchQuery<'_>) -> Result<String, HarvestError>;

    fn list_comment_threads(&self, query: &CommentThreadsQuery<'_>)
    -> Result<String, HarvestError>;
}

impl<T: YouTubeApi + ?Sized> YouTubeApi for &T {
    fn search_videos(&self, query: &SearchQuery<'_>) -> Result<String, HarvestError> {
        (**self).search_videos(query)
    }

    fn list_comment_threads(
        &self,
        query: &CommentThreadsQuery<'_>,
    ) -> Result<String, HarvestError> {
        (**self).list_comment_threads(query)
    }
}
