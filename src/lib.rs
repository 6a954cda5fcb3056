//! artcrop
//!
//! Batch-crops the embedded album art of the MP3 files in one folder to a
//! centered 1:1 square. The first attached picture (APIC/PIC) of each file
//! is decoded, center-cropped to `min(width, height)` on a side, re-encoded
//! as JPEG, and written back into the tag. Already-square art, missing
//! tags, and missing pictures are skipped; per-file failures never stop
//! the batch.
//!
//! The binary in `main.rs` is a thin CLI over [`core`].

pub mod core;
