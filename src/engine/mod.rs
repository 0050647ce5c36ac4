//! Engine module for the CLI: arguments, run handler, progress, output

pub mod arg_parser;
pub mod handlers;
pub mod output;
pub mod progress;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use handlers::handle_run;
pub use output::{comments_to_json, print_summary, summary_lines, write_comments};
pub use progress::{ProgressBar, progress_callback, setup_progress};
