//! Application configuration constants.
//! Defaults and limits in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    pkg_name: &'static str,
    settings_filename: String,
    api_key_env: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                pkg_name: pkg,
                settings_filename: format!(".{pkg}.toml"),
                api_key_env: format!("{}_API_KEY", pkg.to_uppercase()),
            }
        })
    }

    pub fn pkg_name(&self) -> &str {
        self.pkg_name
    }

    /// Optional per-directory settings file, e.g. `.ytcomments.toml`.
    pub fn settings_filename(&self) -> &str {
        &self.settings_filename
    }

    /// Environment variable that overrides the config file's API key, e.g. `YTCOMMENTS_API_KEY`.
    pub fn api_key_env(&self) -> &str {
        &self.api_key_env
    }
}

// ---- Defaults ----

/// Built-in defaults, overridden by the settings file and then by CLI flags.
pub struct Defaults;

impl Defaults {
    /// JSON file holding `API_KEY` and `CHANNEL_ID`.
    pub const CONFIG_FILE: &'static str = "config.json";
    /// Where the comment array is written.
    pub const OUTPUT_FILE: &'static str = "all_comments.json";
    pub const API_BASE_URL: &'static str = "https://www.googleapis.com/youtube/v3";
    /// Per-request timeout (seconds).
    pub const TIMEOUT_SECS: u64 = 30;
}

// ---- API limits ----

/// Largest `maxResults` accepted by `search.list` (commentThreads allows 100).
pub const MAX_RESULTS_LIMIT: u32 = 50;

// ---- Logging ----

/// Characters of comment text shown in debug logs.
pub const COMMENT_PREVIEW_CHARS: usize = 50;

/// Indent for the pretty-printed output file.
pub const OUTPUT_INDENT: &[u8] = b"    ";
