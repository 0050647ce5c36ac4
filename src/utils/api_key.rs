//! API key lookup: env var → .env in dir → config file.

use log::{debug, info};
use std::path::Path;

use crate::utils::config::PackagePaths;

fn read_env_key(key: &str) -> Option<String> {
    let s = std::env::var(key).ok()?;
    let s = s.trim().to_string();
    (!s.is_empty()).then_some(s)
}

fn try_env_then_dotenv(dir: &Path) -> Option<String> {
    let key = PackagePaths::get().api_key_env();
    if let Some(s) = read_env_key(key) {
        return Some(s);
    }
    let env_path = dir.join(".env");
    if env_path.is_file() {
        let _ = dotenvy::from_path(&env_path);
        return read_env_key(key);
    }
    None
}

/// Pick the developer key: env (`YTCOMMENTS_API_KEY`) → `.env` in `dir` → `from_config`.
/// Returns `None` only when no source has a non-blank key.
pub fn resolve_api_key(dir: &Path, from_config: Option<String>) -> Option<String> {
    if let Some(s) = try_env_then_dotenv(dir) {
        info!("API key found in environment");
        return Some(s);
    }
    debug!("Using API key from config file");
    from_config
}
