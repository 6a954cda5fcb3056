//! core/library.rs
//! Folder walking: find the MP3 files directly inside one folder.

use std::path::{Path, PathBuf};

/// List the `.mp3` files directly inside `dir` (no recursion).
///
/// - Extension match is case-insensitive (`.mp3`, `.MP3`, ...)
/// - Subdirectories and non-mp3 files are skipped silently
/// - An unreadable/missing directory is an error for the whole run
pub fn list_mp3s(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries = std::fs::read_dir(dir).map_err(|e| format!("{dir:?}: {e}"))?;

    let mut out = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| e.to_string())?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if is_mp3(&path) {
            out.push(path);
        }
    }

    Ok(out)
}

fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("mp3"))
        .unwrap_or(false)
}
