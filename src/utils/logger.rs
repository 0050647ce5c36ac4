use colored::{ColoredString, Colorize};
use env_logger::Builder;
use log::{Level, LevelFilter};
use std::io::Write;

/// Colors for summary lines.
pub struct Colors;

impl Colors {
    pub const VIDEOS: &'static str = "cyan";
    pub const COMMENTS: &'static str = "green";
    pub const PARTIAL: &'static str = "yellow";

    pub fn colorize(color: &str, text: &str) -> ColoredString {
        text.color(color)
    }
}

/// Logging settings decided once at process start (CLI + settings file).
#[derive(Clone, Copy, Debug)]
pub struct LogConfig {
    /// Debug level for this crate instead of Info.
    pub verbose: bool,
    /// Colorize log prefixes and summary lines.
    pub color: bool,
}

impl LogConfig {
    fn crate_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

/// `[ytcomments] msg` for info/debug, `[ytcomments LEVEL target] msg` for warn/error.
fn format_line(level: Level, target: &str, args: &std::fmt::Arguments<'_>) -> String {
    let name = env!("CARGO_PKG_NAME");
    match level {
        Level::Error | Level::Warn => {
            let level_str = match level {
                Level::Warn => "WARN".yellow(),
                _ => "ERROR".red(),
            };
            format!(
                "[{} {} {}] {}",
                name.cyan(),
                level_str,
                target.white(),
                args
            )
        }
        _ => format!("[{}] {}", name.cyan(), args),
    }
}

/// Install the logger. A logger already installed in this process is kept.
pub fn setup_logging(config: LogConfig) {
    if !config.color {
        colored::control::set_override(false);
    }

    let _ = Builder::from_default_env()
        .filter_level(LevelFilter::Warn) // reqwest/hyper: warnings only
        .filter_module(env!("CARGO_PKG_NAME"), config.crate_level())
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                format_line(record.level(), record.target(), record.args())
            )
        })
        .try_init();
}
