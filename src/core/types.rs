//! Core data types shared between core logic and the CLI.
//!
//! Rule of thumb:
//! - These should be "boring bags of data"
//! - No filesystem code
//! - No tag parsing code
//!
//! `Outcome` is the terminal result for ONE file: every file goes from
//! start to exactly one of these, with no retries in between.

use std::fmt;

/// What happened to a single MP3 file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// First embedded picture was non-square; it was cropped, re-encoded
    /// as JPEG, and the file was saved.
    Processed,
    /// The file has no ID3 header at all.
    SkippedNoHeader,
    /// An ID3 header exists but the tag holds zero frames.
    SkippedNoTag,
    /// Frames exist, but none of them is an attached picture.
    SkippedNoPicture,
    /// The first picture is already 1:1; the file was left untouched.
    SkippedAlreadySquare,
    /// Decode, encode, or save failed. The file was left untouched and
    /// the batch continues with the next file.
    Failed(String),
}

impl Outcome {
    /// True for every non-`Processed`, non-`Failed` variant.
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            Outcome::SkippedNoHeader
                | Outcome::SkippedNoTag
                | Outcome::SkippedNoPicture
                | Outcome::SkippedAlreadySquare
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Processed => write!(f, "album art cropped to 1:1"),
            Outcome::SkippedNoHeader => write!(f, "skipped: no ID3 tag"),
            Outcome::SkippedNoTag => write!(f, "skipped: no tags found"),
            Outcome::SkippedNoPicture => write!(f, "skipped: no album art (APIC) tag found"),
            Outcome::SkippedAlreadySquare => write!(f, "skipped: image is already 1:1"),
            Outcome::Failed(reason) => write!(f, "error processing album art: {reason}"),
        }
    }
}
