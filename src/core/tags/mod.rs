//! core/tags/mod.rs
//!
//! ID3 tag IO.
//! Public API:
//! - [`crop_embedded_art`] crops the first embedded picture of an MP3 to a
//!   centered square and saves the file (non-fatal on any per-file failure).

mod art;

pub use art::crop_embedded_art;
