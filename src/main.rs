//! artcrop CLI
//!
//! One positional argument: the folder holding the MP3s. Files are
//! processed strictly one after another; every file gets one printed line,
//! and the run ends with a short summary. Individual skips and failures
//! leave the exit status at 0 — only failing to list the folder itself
//! exits non-zero.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use artcrop::core;

#[derive(Debug, Parser)]
#[command(
    name = "artcrop",
    about = "Crop the embedded album art of MP3 files in a folder to a centered 1:1 square"
)]
struct Args {
    /// Path to the folder containing MP3 files
    folder: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let paths = core::scan_paths(&args.folder).map_err(anyhow::Error::msg)?;

    let mut processed = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for path in paths {
        let outcome = core::tags::crop_embedded_art(&path);
        println!("{}: {outcome}", path.display());

        if outcome.is_skip() {
            skipped += 1;
        } else if matches!(outcome, core::types::Outcome::Processed) {
            processed += 1;
        } else {
            failed += 1;
        }
    }

    println!("Done: {processed} cropped, {skipped} skipped, {failed} failed.");

    Ok(())
}
