use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::utils::config::Defaults;

/// Temp path next to `path`, e.g. `all_comments.json.tmp`.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(Defaults::OUTPUT_FILE);
    path.parent()
        .unwrap_or(Path::new("."))
        .join(format!("{name}.tmp"))
}

/// Write `bytes` to a temp file beside `path`, then rename over `path` (atomic replace).
/// Stale temps from an earlier crash are overwritten; the temp is removed if the write fails.
pub fn write_via_temp(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let temp_path = temp_path_for(path);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    if let Err(e) = fs::write(&temp_path, bytes) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    fs::rename(&temp_path, path).inspect_err(|_| {
        let _ = fs::remove_file(&temp_path);
    })
}
