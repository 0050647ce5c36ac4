use log::{debug, info};

use crate::api::{CommentThreadsQuery, SearchQuery, YouTubeApi};
use crate::error::HarvestError;
use crate::pipeline::processors::{process_comment_page, process_search_page};
use crate::pipeline::walk::walk_pages;
use crate::pipeline::{HarvestPhase, HarvestReport, HarvestStatus, PipelineContext};
use crate::{Comment, HarvestOpts, Video};

/// Phase 1: page through `search.list` for `channel_id`, appending every video to `videos`.
/// Returns the number of pages read. On error, videos from earlier pages stay in `videos`.
pub fn discover_videos<A: YouTubeApi + ?Sized>(
    api: &A,
    channel_id: &str,
    opts: &HarvestOpts,
    videos: &mut Vec<Video>,
) -> Result<usize, HarvestError> {
    walk_pages(
        |page_token| {
            api.search_videos(&SearchQuery {
                channel_id,
                page_token,
                max_results: opts.max_results,
            })
        },
        |body: String| process_search_page(&body),
        videos,
    )
}

/// Phase 2, one video: page through `commentThreads.list` for `video`, appending to `comments`.
/// Returns the number of pages read. On error, comments from earlier pages stay in `comments`.
pub fn collect_video_comments<A: YouTubeApi + ?Sized>(
    api: &A,
    video: &Video,
    opts: &HarvestOpts,
    comments: &mut Vec<Comment>,
) -> Result<usize, HarvestError> {
    walk_pages(
        |page_token| {
            debug!(
                "Requesting comment threads for {} (page {})",
                video.video_id,
                page_token.unwrap_or("first")
            );
            api.list_comment_threads(&CommentThreadsQuery {
                video_id: &video.video_id,
                page_token,
                max_results: opts.max_results,
            })
        },
        |body: String| process_comment_page(&body, video),
        comments,
    )
}

/// Main orchestrator: discover the channel's videos, then collect every video's comments in
/// discovery order. Never fails as a whole; the first error stops the run and is recorded in
/// the report's status next to whatever was accumulated before it.
pub fn run_pipeline<A: YouTubeApi + ?Sized>(ctx: PipelineContext<'_, A>) -> HarvestReport {
    let mut videos = Vec::new();
    let mut comments = Vec::new();

    if let Err(error) = discover_videos(ctx.api, ctx.channel_id, ctx.opts, &mut videos) {
        return HarvestReport {
            videos,
            comments,
            status: HarvestStatus::Aborted {
                phase: HarvestPhase::VideoDiscovery,
                videos_completed: 0,
                error,
            },
        };
    }
    info!(
        "Discovered {} videos on channel {}",
        videos.len(),
        ctx.channel_id
    );

    let mut aborted = None;
    for (done, video) in videos.iter().enumerate() {
        let before = comments.len();
        if let Err(error) = collect_video_comments(ctx.api, video, ctx.opts, &mut comments) {
            aborted = Some((video.video_id.clone(), done, error));
            break;
        }
        debug!(
            "{} comments on {}",
            comments.len() - before,
            video.video_id
        );
        if let Some(f) = &ctx.on_video_collected {
            f(1);
        }
    }

    let status = match aborted {
        None => HarvestStatus::Completed,
        Some((video_id, videos_completed, error)) => HarvestStatus::Aborted {
            phase: HarvestPhase::CommentCollection { video_id },
            videos_completed,
            error,
        },
    };
    HarvestReport {
        videos,
        comments,
        status,
    }
}
