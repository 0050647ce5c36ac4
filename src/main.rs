//! ytcomments CLI: collect every top-level comment on a channel's videos into one JSON file.

use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use ytcomments::engine::arg_parser::Cli;
use ytcomments::engine::handle_run;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
