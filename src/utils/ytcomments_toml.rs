//! Load `.ytcomments.toml` from a directory (CLI only). Lib does not use this; callers pass HarvestOpts.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::Opts;
use crate::utils::config::PackagePaths;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct YtcommentsToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsSection {
    output: Option<String>,
    verbose: Option<bool>,
    strict: Option<bool>,
    max_results: Option<u32>,
    api_base_url: Option<String>,
    timeout_secs: Option<u64>,
}

/// Load the settings file from `dir`. `Ok(None)` when the file is absent; `Err` carries a
/// printable message when it exists but does not parse. CLI only.
pub(crate) fn load_ytcomments_toml(dir: &Path) -> Result<Option<YtcommentsToml>, String> {
    let path = dir.join(PackagePaths::get().settings_filename());
    let Ok(s) = std::fs::read_to_string(&path) else {
        return Ok(None);
    };
    parse_ytcomments_toml(&s)
        .map(Some)
        .map_err(|e| format!("{}: {}", path.display(), e))
}

pub(crate) fn parse_ytcomments_toml(s: &str) -> Result<YtcommentsToml, toml::de::Error> {
    toml::from_str(s)
}

impl YtcommentsToml {
    /// Verbose flag from the file; read before logging is set up.
    pub(crate) fn verbose(&self) -> Option<bool> {
        self.settings.verbose
    }
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($sec:expr, $opts:expr, $sec_field:ident => $opts_field:ident) => {
        if let Some(v) = $sec.$sec_field.clone() {
            $opts.$opts_field = v;
        }
    };
}

/// Apply file settings to opts (only fields present in the file). Call before applying CLI.
/// Credentials never come from this file.
pub(crate) fn apply_file_to_opts(file: &YtcommentsToml, opts: &mut Opts) {
    let sec = &file.settings;
    if let Some(ref p) = sec.output {
        opts.output = PathBuf::from(p);
    }
    apply_file_opt!(sec, opts, verbose => verbose);
    apply_file_opt!(sec, opts, strict => strict);
    apply_file_opt!(sec, opts, api_base_url => api_base_url);
    apply_file_opt!(sec, opts, timeout_secs => timeout_secs);
    if sec.max_results.is_some() {
        opts.max_results = sec.max_results;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::Defaults;

    fn base_opts() -> Opts {
        Opts {
            api_key: "k".to_string(),
            channel_id: "c".to_string(),
            output: PathBuf::from(Defaults::OUTPUT_FILE),
            verbose: false,
            strict: false,
            max_results: None,
            api_base_url: Defaults::API_BASE_URL.to_string(),
            timeout_secs: Defaults::TIMEOUT_SECS,
        }
    }

    #[test]
    fn present_fields_override() {
        let file = parse_ytcomments_toml(
            "[settings]\noutput = \"out/comments.json\"\nstrict = true\nmax_results = 50\n",
        )
        .unwrap();
        let mut opts = base_opts();
        apply_file_to_opts(&file, &mut opts);
        assert_eq!(opts.output, PathBuf::from("out/comments.json"));
        assert!(opts.strict);
        assert_eq!(opts.max_results, Some(50));
        // untouched
        assert!(!opts.verbose);
        assert_eq!(opts.timeout_secs, Defaults::TIMEOUT_SECS);
        assert_eq!(opts.api_base_url, Defaults::API_BASE_URL);
    }

    #[test]
    fn empty_file_changes_nothing() {
        let file = parse_ytcomments_toml("").unwrap();
        let mut opts = base_opts();
        apply_file_to_opts(&file, &mut opts);
        assert_eq!(opts.output, PathBuf::from(Defaults::OUTPUT_FILE));
        assert_eq!(opts.max_results, None);
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(parse_ytcomments_toml("[settings]\nverbose = \"yes\"\n").is_err());
    }
}
