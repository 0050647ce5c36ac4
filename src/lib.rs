//! ytcomments: page through a YouTube channel's videos and collect every top-level comment

pub mod api;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use error::HarvestError;
pub use pipeline::{HarvestPhase, HarvestReport, HarvestStatus};
pub use types::*;

use log::debug;
use std::time::Duration;

use crate::api::{YouTubeApi, YouTubeClient};
use crate::pipeline::{PipelineContext, run_pipeline};
use crate::utils::config::Defaults;

/// Result alias used by public ytcomments API
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Single entry point: harvest every comment on `channel_id`'s videos using the public Data API.
///
/// Only fails if the HTTP client cannot be built. Errors during the run are recorded in the
/// returned report's [`HarvestStatus`]; use [`HarvestReport::into_result`] to treat a partial
/// run as an error, or read `report.comments` to keep what was collected.
///
/// ```ignore
/// let report = ytcomments::harvest_channel("API_KEY", "UC...", &Default::default())?;
/// println!("{} comments", report.comments.len());
/// ```
pub fn harvest_channel(
    api_key: &str,
    channel_id: &str,
    opts: &HarvestOpts,
) -> Result<HarvestReport> {
    let client = YouTubeClient::new(
        api_key,
        Defaults::API_BASE_URL,
        Duration::from_secs(Defaults::TIMEOUT_SECS),
    )?;
    Ok(harvest_channel_with(&client, channel_id, opts))
}

/// [`harvest_channel`] over any [`YouTubeApi`], e.g. a client built with another base URL.
pub fn harvest_channel_with<A: YouTubeApi + ?Sized>(
    api: &A,
    channel_id: &str,
    opts: &HarvestOpts,
) -> HarvestReport {
    debug!(
        "{} OPTS:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );
    run_pipeline(PipelineContext::new(api, channel_id, opts))
}
