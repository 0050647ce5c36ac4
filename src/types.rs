//! Public and internal types for the ytcomments API and pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One video discovered on the channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub video_id: String,
    pub video_title: String,
}

/// One top-level comment, tagged with the video it was posted on.
///
/// Serialized in declaration order: `video_id`, `video_title`, `author`, `comment_text`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub video_id: String,
    pub video_title: String,
    pub author: String,
    pub comment_text: String,
}

impl Comment {
    /// Build a comment for `video` from the author and text of one comment thread.
    pub fn on_video(video: &Video, author: String, comment_text: String) -> Self {
        Self {
            video_id: video.video_id.clone(),
            video_title: video.video_title.clone(),
            author,
            comment_text,
        }
    }
}

/// Lib-only options for [`harvest_channel`](crate::harvest_channel). Only the fields that
/// shape API requests; output and logging belong to the CLI.
#[derive(Clone, Debug, Default)]
pub struct HarvestOpts {
    /// `maxResults` sent on every list request. `None` leaves the API default (5 for search, 20 for commentThreads).
    pub max_results: Option<u32>,
}

/// Full options (CLI). Use [`HarvestOpts`] for lib.
#[derive(Clone, Debug)]
pub struct Opts {
    /// Developer key used for every request.
    pub api_key: String,
    /// Channel whose videos are enumerated.
    pub channel_id: String,
    /// Where the comment array is written.
    pub output: PathBuf,
    /// Debug logging and progress bar.
    pub verbose: bool,
    /// Strict mode: on a failed run, skip writing partial output and exit non-zero.
    pub strict: bool,
    /// `maxResults` for list requests.
    pub max_results: Option<u32>,
    /// Base URL of the Data API (override to point at a mock server).
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl From<&Opts> for HarvestOpts {
    fn from(o: &Opts) -> Self {
        HarvestOpts {
            max_results: o.max_results,
        }
    }
}
