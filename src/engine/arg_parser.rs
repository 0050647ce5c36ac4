use clap::Parser;
use std::path::PathBuf;

use crate::utils::config::{Defaults, MAX_RESULTS_LIMIT};

/// Collect every top-level comment on a YouTube channel's videos into one JSON file.
#[derive(Clone, Parser)]
#[command(name = "ytcomments")]
#[command(
    about = "Page through a channel's videos and their comment threads; write all comments to JSON."
)]
pub struct Cli {
    /// JSON file with API_KEY and CHANNEL_ID.
    #[arg(long, short, value_name = "FILE", default_value = Defaults::CONFIG_FILE)]
    pub config: PathBuf,

    /// Output file. Default: all_comments.json (overwritten).
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Channel to harvest, instead of CHANNEL_ID from the config file.
    #[arg(long, value_name = "ID")]
    pub channel: Option<String>,

    /// Verbose output: debug logs and a progress bar.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,

    /// Strict mode: if the run aborts, do not write partial output and exit non-zero.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub strict: Option<bool>,

    /// Items per page requested from the API (1-50). Default: the API's own default.
    #[arg(long, short = 'm', value_parser = clap::value_parser!(u32).range(1..=MAX_RESULTS_LIMIT as i64))]
    pub max_results: Option<u32>,

    /// Data API base URL (e.g. a local mock server).
    #[arg(long, value_name = "URL")]
    pub api_base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, short = 't', value_parser = clap::value_parser!(u64))]
    pub timeout: Option<u64>,

    /// Disable colored log output.
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["ytcomments"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("config.json"));
        assert_eq!(cli.output, None);
        assert_eq!(cli.verbose, None);
        assert!(!cli.no_color);
    }

    #[test]
    fn bare_flags_mean_true() {
        let cli = Cli::try_parse_from(["ytcomments", "-v", "--strict"]).unwrap();
        assert_eq!(cli.verbose, Some(true));
        assert_eq!(cli.strict, Some(true));
    }

    #[test]
    fn max_results_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["ytcomments", "--max-results", "0"]).is_err());
        assert!(Cli::try_parse_from(["ytcomments", "--max-results", "51"]).is_err());
        let cli = Cli::try_parse_from(["ytcomments", "-m", "50"]).unwrap();
        assert_eq!(cli.max_results, Some(50));
    }
}
