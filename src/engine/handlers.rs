//! CLI command handler: resolve options, run the harvest, report, persist.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::YouTubeClient;
use crate::engine::arg_parser::Cli;
use crate::engine::output::{print_summary, write_comments};
use crate::engine::progress::{progress_callback, setup_progress};
use crate::error::HarvestError;
use crate::pipeline::{PipelineContext, check_for_aborted_run, run_pipeline};
use crate::utils::config::{Defaults, MAX_RESULTS_LIMIT, PackagePaths};
use crate::utils::ytcomments_toml::{YtcommentsToml, apply_file_to_opts, load_ytcomments_toml};
use crate::utils::{
    Colors, Credentials, LogConfig, load_credentials, resolve_api_key, setup_logging,
};
use crate::{HarvestOpts, HarvestReport, Opts};

/// CLI flags win over everything before them.
fn apply_cli_to_opts(cli: &Cli, opts: &mut Opts) {
    if let Some(ref p) = cli.output {
        opts.output = p.clone();
    }
    if let Some(v) = cli.verbose {
        opts.verbose = v;
    }
    if let Some(v) = cli.strict {
        opts.strict = v;
    }
    if cli.max_results.is_some() {
        opts.max_results = cli.max_results;
    }
    if let Some(ref url) = cli.api_base_url {
        opts.api_base_url = url.clone();
    }
    if let Some(secs) = cli.timeout {
        opts.timeout_secs = secs;
    }
}

/// Defaults → config file credentials (env key override) → settings file → CLI.
pub(crate) fn build_opts(cli: &Cli, dir: &Path, file: Option<&YtcommentsToml>) -> Result<Opts> {
    let creds = load_credentials(&cli.config)?;
    let creds = Credentials {
        api_key: resolve_api_key(dir, creds.api_key),
        channel_id: cli.channel.clone().or(creds.channel_id),
    };
    let (api_key, channel_id) = creds.require(&cli.config)?;

    let mut opts = Opts {
        api_key,
        channel_id,
        output: PathBuf::from(Defaults::OUTPUT_FILE),
        verbose: false,
        strict: false,
        max_results: None,
        api_base_url: Defaults::API_BASE_URL.to_string(),
        timeout_secs: Defaults::TIMEOUT_SECS,
    };
    if let Some(file) = file {
        apply_file_to_opts(file, &mut opts);
    }
    apply_cli_to_opts(cli, &mut opts);

    // CLI values are range-checked by clap; only the settings file can get here out of range.
    if let Some(n) = opts.max_results
        && !(1..=MAX_RESULTS_LIMIT).contains(&n)
    {
        return Err(HarvestError::config(
            dir.join(PackagePaths::get().settings_filename()),
            format!("max_results must be 1-{}, got {}", MAX_RESULTS_LIMIT, n),
        )
        .into());
    }
    Ok(opts)
}

fn setup_opts(cli: &Cli) -> Result<Opts> {
    let dir = Path::new(".");
    let file = load_ytcomments_toml(dir);
    let file_verbose = file.as_ref().ok().and_then(|f| f.as_ref()?.verbose());
    setup_logging(LogConfig {
        verbose: cli.verbose.or(file_verbose).unwrap_or(false),
        color: !cli.no_color,
    });
    let file = file.unwrap_or_else(|msg| {
        warn!("Ignoring settings file: {}", msg);
        None
    });
    build_opts(cli, dir, file.as_ref())
}

/// Harvest the configured channel, print totals, then write comments (partial ones too unless strict).
pub fn handle_run(cli: &Cli) -> Result<()> {
    let opts = setup_opts(cli)?;
    debug!(
        "{} output={} strict={} max_results={:?} api={}",
        PackagePaths::get().pkg_name().to_uppercase(),
        opts.output.display(),
        opts.strict,
        opts.max_results,
        opts.api_base_url
    );

    let client = YouTubeClient::new(
        &opts.api_key,
        &opts.api_base_url,
        Duration::from_secs(opts.timeout_secs),
    )
    .context("build YouTube client")?;
    let harvest_opts = HarvestOpts::from(&opts);
    let bar = setup_progress(opts.verbose);

    info!(
        "Harvesting channel {}",
        Colors::colorize(Colors::VIDEOS, &opts.channel_id)
    );
    let report = run_pipeline(
        PipelineContext::new(&client, &opts.channel_id, &harvest_opts)
            .with_progress(progress_callback(&bar)),
    );
    if bar.is_some() {
        // the counter leaves the cursor on its own line
        eprintln!();
    }

    finish_run(&opts, &report)
}

/// Totals first, then the strict check, then the write. A strict aborted run writes nothing.
pub(crate) fn finish_run(opts: &Opts, report: &HarvestReport) -> Result<()> {
    print_summary(report);
    check_for_aborted_run(opts.strict, report)?;

    write_comments(&opts.output, &report.comments)?;
    let written = format!("{} comments", report.comments.len());
    let written = if report.is_complete() {
        Colors::colorize(Colors::COMMENTS, &written)
    } else {
        Colors::colorize(Colors::PARTIAL, &format!("{} (partial)", written))
    };
    info!("Wrote {} to {}", written, opts.output.display());
    Ok(())
}
