//! Pipeline context and run outcome: what the two phases share and what they hand back.

use std::fmt;

use crate::api::YouTubeApi;
use crate::error::HarvestError;
use crate::{Comment, HarvestOpts, Video};

/// Called with `1` each time a video's comments are fully collected (progress bar hook).
pub type OnVideoCollected = Box<dyn Fn(usize)>;

/// Shared context for both phases. Built by the caller and passed into [`run_pipeline`](super::run_pipeline).
pub struct PipelineContext<'a, A: YouTubeApi + ?Sized> {
    pub api: &'a A,
    pub channel_id: &'a str,
    pub opts: &'a HarvestOpts,
    pub on_video_collected: Option<OnVideoCollected>,
}

impl<'a, A: YouTubeApi + ?Sized> PipelineContext<'a, A> {
    pub fn new(api: &'a A, channel_id: &'a str, opts: &'a HarvestOpts) -> Self {
        Self {
            api,
            channel_id,
            opts,
            on_video_collected: None,
        }
    }

    pub fn with_progress(mut self, on_video_collected: Option<OnVideoCollected>) -> Self {
        self.on_video_collected = on_video_collected;
        self
    }
}

/// Which stage of the run failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HarvestPhase {
    VideoDiscovery,
    /// Comment collection, failing on the named video.
    CommentCollection { video_id: String },
}

impl fmt::Display for HarvestPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarvestPhase::VideoDiscovery => write!(f, "video discovery"),
            HarvestPhase::CommentCollection { video_id } => {
                write!(f, "comment collection (video {})", video_id)
            }
        }
    }
}

#[derive(Debug)]
pub enum HarvestStatus {
    Completed,
    /// The run stopped early. `videos_completed` counts videos whose comments were all collected.
    Aborted {
        phase: HarvestPhase,
        videos_completed: usize,
        error: HarvestError,
    },
}

/// Everything a run produced, complete or not.
#[derive(Debug)]
pub struct HarvestReport {
    pub videos: Vec<Video>,
    pub comments: Vec<Comment>,
    pub status: HarvestStatus,
}

impl HarvestReport {
    pub fn is_complete(&self) -> bool {
        matches!(self.status, HarvestStatus::Completed)
    }

    /// The error that stopped the run, if any.
    pub fn error(&self) -> Option<&HarvestError> {
        match &self.status {
            HarvestStatus::Completed => None,
            HarvestStatus::Aborted { error, .. } => Some(error),
        }
    }

    /// Comments of a complete run, or the error of an aborted one (partial comments dropped).
    pub fn into_result(self) -> Result<Vec<Comment>, HarvestError> {
        match self.status {
            HarvestStatus::Completed => Ok(self.comments),
            HarvestStatus::Aborted { error, .. } => Err(error),
        }
    }
}
