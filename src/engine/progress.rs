//! Progress display for comment collection

use kdam::{Animation, Bar, BarExt};
use std::sync::{Arc, Mutex};

use crate::pipeline::OnVideoCollected;

// Progress bar type alias
pub type ProgressBar = Arc<Mutex<Bar>>;

/// Create a counter for unknown total (shows count without percentage).
/// The video count is only known once discovery finishes, so comment collection uses a counter.
pub fn create_counter(desc: &'static str, unit: &'static str) -> ProgressBar {
    Arc::new(Mutex::new(kdam::tqdm!(
        total = 0,
        desc = desc,
        animation = Animation::Classic,
        position = 0,
        unit = unit
    )))
}

/// Force a refresh of the bar (e.g. so the counter shows "0 videos" immediately).
pub fn refresh_bar(pb: &ProgressBar) {
    if let Ok(mut bar) = pb.try_lock() {
        let _ = bar.refresh();
    }
}

/// Advance the bar by `n`.
pub fn update_progress_bar(pb: &ProgressBar, n: usize) {
    if let Ok(mut pb) = pb.try_lock() {
        let _ = pb.update(n);
    }
}

/// Create a progress callback that advances the bar, for [`PipelineContext::with_progress`](crate::pipeline::PipelineContext::with_progress).
pub fn progress_callback(bar: &Option<ProgressBar>) -> Option<OnVideoCollected> {
    bar.as_ref().map(|bar| {
        let bar = Arc::clone(bar);
        Box::new(move |n: usize| update_progress_bar(&bar, n)) as OnVideoCollected
    })
}

/// Counter bar when verbose, else nothing.
pub fn setup_progress(verbose: bool) -> Option<ProgressBar> {
    verbose.then(|| {
        let bar = create_counter("Collecting comments", " videos");
        refresh_bar(&bar);
        bar
    })
}
