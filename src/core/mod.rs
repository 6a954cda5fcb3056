//! core/mod.rs
//!
//! The brain of the tool:
//! - Discover candidate MP3 paths (single-folder listing)
//! - Crop-and-replace embedded album art (tag IO)
//! - Return plain data for the CLI to print
//!
//! The pipeline is explicit and modular:
//!   (A) discover paths -> Vec<PathBuf>
//!   (B) crop each file -> Outcome
//!
//! This keeps the CLI dumb: it only sequences the calls and prints lines.

pub mod crop;
pub mod library;
pub mod tags;
pub mod types;

use std::path::{Path, PathBuf};

use types::Outcome;

/// Discover the MP3 files directly inside `root`.
///
/// - MP3-only, no recursion into subdirectories
/// - Sorts paths once (core owns ordering, callers shouldn't)
/// - A missing/unreadable directory is fatal to the whole run
pub fn scan_paths(root: &Path) -> Result<Vec<PathBuf>, String> {
    let mut paths = library::list_mp3s(root)?;
    paths.sort();
    Ok(paths)
}

/// Convenience: run the whole pipeline over one folder.
///
/// Strictly sequential: each file is fully read, cropped, and saved before
/// the next begins. Per-file failures land in the returned outcomes and
/// never abort the batch.
pub fn process_folder(root: &Path) -> Result<Vec<(PathBuf, Outcome)>, String> {
    let paths = scan_paths(root)?;

    let mut out = Vec::with_capacity(paths.len());
    for path in paths {
        let outcome = tags::crop_embedded_art(&path);
        out.push((path, outcome));
    }

    Ok(out)
}
