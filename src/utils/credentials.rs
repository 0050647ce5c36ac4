//! Load the JSON config file holding the developer key and channel id.

use serde::Deserialize;
use std::path::Path;

use crate::error::HarvestError;

/// `{ "API_KEY": "...", "CHANNEL_ID": "..." }`. Either key may be supplied elsewhere
/// (environment, CLI); [`Credentials::require`] checks that both ended up set.
#[derive(Debug, Default, Deserialize)]
pub struct Credentials {
    #[serde(rename = "API_KEY", default)]
    pub api_key: Option<String>,
    #[serde(rename = "CHANNEL_ID", default)]
    pub channel_id: Option<String>,
}

/// Read and parse `path`. A missing or unparsable file is a config error; the run cannot start.
pub fn load_credentials(path: &Path) -> Result<Credentials, HarvestError> {
    let s = std::fs::read_to_string(path).map_err(|e| HarvestError::config(path, e))?;
    serde_json::from_str(&s).map_err(|e| HarvestError::config(path, e))
}

impl Credentials {
    /// `(api_key, channel_id)`, or a config error naming the first one missing or blank.
    pub fn require(self, path: &Path) -> Result<(String, String), HarvestError> {
        let api_key = non_blank(self.api_key).ok_or_else(|| {
            HarvestError::config(
                path,
                format!(
                    "API_KEY is missing (set it in the file or via {})",
                    crate::utils::config::PackagePaths::get().api_key_env()
                ),
            )
        })?;
        let channel_id = non_blank(self.channel_id)
            .ok_or_else(|| HarvestError::config(path, "CHANNEL_ID is missing"))?;
        Ok((api_key, channel_id))
    }
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
