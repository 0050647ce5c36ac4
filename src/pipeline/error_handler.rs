use anyhow::Result;
use log::{error, warn};

use super::{HarvestReport, HarvestStatus};

/// Check a finished run: if strict and the run aborted, return its error; otherwise log it and
/// carry on so the partial comment list still gets written. Call after printing the summary.
pub fn check_for_aborted_run(strict: bool, report: &HarvestReport) -> Result<()> {
    let HarvestStatus::Aborted {
        phase,
        videos_completed,
        error,
    } = &report.status
    else {
        return Ok(());
    };
    if strict {
        return Err(anyhow::anyhow!(
            "run aborted during {} after {} of {} videos: {}",
            phase,
            videos_completed,
            report.videos.len(),
            error
        ));
    }
    error!("Error during {}:\n{}", phase, error);
    warn!(
        "Output is partial: comments of {} of {} discovered videos were fully collected",
        videos_completed,
        report.videos.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HarvestError;
    use crate::pipeline::HarvestPhase;

    fn aborted() -> HarvestReport {
        HarvestReport {
            videos: Vec::new(),
            comments: Vec::new(),
            status: HarvestStatus::Aborted {
                phase: HarvestPhase::VideoDiscovery,
                videos_completed: 0,
                error: HarvestError::Api {
                    endpoint: "search.list",
                    status: 403,
                    message: "quotaExceeded".to_string(),
                },
            },
        }
    }

    #[test]
    fn completed_run_is_ok_in_strict_mode() {
        let report = HarvestReport {
            videos: Vec::new(),
            comments: Vec::new(),
            status: HarvestStatus::Completed,
        };
        assert!(check_for_aborted_run(true, &report).is_ok());
    }

    #[test]
    fn aborted_run_is_ok_when_not_strict() {
        assert!(check_for_aborted_run(false, &aborted()).is_ok());
    }

    #[test]
    fn aborted_run_fails_when_strict() {
        let err = check_for_aborted_run(true, &aborted()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("video discovery"));
        assert!(msg.contains("quotaExceeded"));
    }
}
