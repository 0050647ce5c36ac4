//! In-memory stand-in for the Data API: canned JSON pages keyed by (resource id, page token).

#![allow(dead_code)]

use serde_json::json;
use std::cell::RefCell;
use std::collections::HashMap;

use ytcomments::HarvestError;
use ytcomments::api::{CommentThreadsQuery, SearchQuery, YouTubeApi};

enum Canned {
    Body(String),
    Fail { status: u16, message: String },
}

#[derive(Default)]
pub struct FakeApi {
    search: HashMap<(String, Option<String>), Canned>,
    threads: HashMap<(String, Option<String>), Canned>,
    /// Every request as "search:<channel>:<token>" / "threads:<video>:<token>".
    pub calls: RefCell<Vec<String>>,
}

fn key(id: &str, token: Option<&str>) -> (String, Option<String>) {
    (id.to_string(), token.map(str::to_string))
}

fn answer(
    endpoint: &'static str,
    book: &HashMap<(String, Option<String>), Canned>,
    id: &str,
    token: Option<&str>,
) -> Result<String, HarvestError> {
    match book.get(&key(id, token)) {
        Some(Canned::Body(b)) => Ok(b.clone()),
        Some(Canned::Fail { status, message }) => Err(HarvestError::Api {
            endpoint,
            status: *status,
            message: message.clone(),
        }),
        None => Err(HarvestError::Api {
            endpoint,
            status: 404,
            message: format!("no canned page for {} {:?}", id, token),
        }),
    }
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search page for `channel` requested with `token`: `videos` are (id, title).
    pub fn search_page(
        mut self,
        channel: &str,
        token: Option<&str>,
        videos: &[(&str, &str)],
        next: Option<&str>,
    ) -> Self {
        self.search.insert(
            key(channel, token),
            Canned::Body(search_body(videos, next)),
        );
        self
    }

    /// Comment page for `video` requested with `token`: `comments` are (author, text).
    pub fn comment_page(
        mut self,
        video: &str,
        token: Option<&str>,
        comments: &[(&str, &str)],
        next: Option<&str>,
    ) -> Self {
        self.threads.insert(
            key(video, token),
            Canned::Body(comment_body(comments, next)),
        );
        self
    }

    pub fn raw_comment_page(mut self, video: &str, token: Option<&str>, body: &str) -> Self {
        self.threads
            .insert(key(video, token), Canned::Body(body.to_string()));
        self
    }

    pub fn failing_search(mut self, channel: &str, token: Option<&str>, status: u16) -> Self {
        self.search.insert(
            key(channel, token),
            Canned::Fail {
                status,
                message: "quotaExceeded".to_string(),
            },
        );
        self
    }

    pub fn failing_comments(mut self, video: &str, token: Option<&str>, status: u16) -> Self {
        self.threads.insert(
            key(video, token),
            Canned::Fail {
                status,
                message: "commentsDisabled".to_string(),
            },
        );
        self
    }
}

impl YouTubeApi for FakeApi {
    fn search_videos(&self, query: &SearchQuery<'_>) -> Result<String, HarvestError> {
        self.calls.borrow_mut().push(format!(
            "search:{}:{}",
            query.channel_id,
            query.page_token.unwrap_or("-")
        ));
        answer("search.list", &self.search, query.channel_id, query.page_token)
    }

    fn list_comment_threads(
        &self,
        query: &CommentThreadsQuery<'_>,
    ) -> Result<String, HarvestError> {
        self.calls.borrow_mut().push(format!(
            "threads:{}:{}",
            query.video_id,
            query.page_token.unwrap_or("-")
        ));
        answer(
            "commentThreads.list",
            &self.threads,
            query.video_id,
            query.page_token,
        )
    }
}

pub fn search_body(videos: &[(&str, &str)], next: Option<&str>) -> String {
    let items: Vec<_> = videos
        .iter()
        .map(|(id, title)| {
            json!({
                "kind": "youtube#searchResult",
                "id": {"kind": "youtube#video", "videoId": id},
                "snippet": {"title": title, "channelId": "c"}
            })
        })
        .collect();
    let mut page = json!({"kind": "youtube#searchListResponse", "items": items});
    if let Some(t) = next {
        page["nextPageToken"] = json!(t);
    }
    page.to_string()
}

pub fn comment_body(comments: &[(&str, &str)], next: Option<&str>) -> String {
    let items: Vec<_> = comments
        .iter()
        .map(|(author, text)| {
            json!({
                "kind": "youtube#commentThread",
                "snippet": {
                    "topLevelComment": {
                        "snippet": {"authorDisplayName": author, "textDisplay": text}
                    },
                    "totalReplyCount": 0
                }
            })
        })
        .collect();
    let mut page = json!({"kind": "youtube#commentThreadListResponse", "items": items});
    if let Some(t) = next {
        page["nextPageToken"] = json!(t);
    }
    page.to_string()
}

/// Unique scratch path under the system temp dir.
pub fn scratch_path(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("ytcomments_it_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}
