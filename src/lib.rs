//! Organizes TV episodes and movies using the Jellyfin naming scheme.
//!
//! Shows live in `"Series Name (2018) [tvdbid-65567]"`, seasons in
//! `"Season 01"` below them and episodes are named `"Series Name S01E01.mkv"`.
//! New episodes are ordered by a number taken from their original filename
//! and appended after the last episode already in the season.

pub mod cli;
pub mod config;
pub mod error;
pub mod media;
pub mod naming;
pub mod organizer;
pub mod rename_engine;
pub mod sequence;
pub mod sorter;
pub mod tokens;
pub mod torrent;

pub use error::{Error, Result};
