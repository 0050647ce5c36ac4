//! Pipeline components: page walk, page processors, orchestration, and run outcome handling.

pub mod context;
pub mod error_handler;
pub mod orchestrator;
pub mod processors;
pub mod walk;

pub use context::{
    HarvestPhase, HarvestReport, HarvestStatus, OnVideoCollected, PipelineContext,
};
pub use error_handler::check_for_aborted_run;
pub use orchestrator::{collect_video_comments, discover_videos, run_pipeline};
pub use processors::{ProcessedPage, process_comment_page, process_search_page};
pub use walk::{collect_pages, walk_pages};
