//! Episode numbering for fresh and partially filled seasons.
//!
//! The previous episode is read from the lexicographically last entry of the
//! season directory. That only matches numeric order while episode numbers
//! fit the two-digit padding; a season with 100 or more episodes sorts
//! `E100` before `E99` and continues from the wrong number.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Offset for a freshly created season: the first episode becomes `E01`.
pub const FRESH_SEASON_OFFSET: u64 = 0;

/// Parses the episode number from a name like `"Show S03E07.mkv"`.
///
/// The number is the first run of digits that directly follows an `E` and is
/// directly followed by a `.`, so sidecars like `"Show S03E07.pt.srt"` parse
/// too.
pub fn episode_number(name: &str) -> Result<u64> {
    let bytes = name.as_bytes();
    for (marker, _) in name.match_indices('E') {
        let start = marker + 1;
        let len = bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if len > 0 && bytes.get(start + len) == Some(&b'.') {
            return name[start..start + len]
                .parse::<u64>()
                .map_err(|_| Error::InvalidEpisodeNumber {
                    name: name.to_string(),
                });
        }
    }
    Err(Error::InvalidEpisode {
        name: name.to_string(),
    })
}

/// Offset to continue numbering after the existing `entries`.
pub fn offset_from_entries<S: AsRef<str>>(entries: &[S]) -> Result<u64> {
    match entries.iter().map(AsRef::as_ref).max() {
        Some(last) => episode_number(last),
        None => Ok(FRESH_SEASON_OFFSET),
    }
}

/// Reads `season_dir` and returns the offset for newly added episodes.
pub fn offset_for_directory(season_dir: &Path) -> Result<u64> {
    let entries = fs::read_dir(season_dir)
        .map_err(|e| Error::io(season_dir, e))?
        .map(|entry| {
            entry
                .map(|e| e.file_name().to_string_lossy().to_string())
                .map_err(|e| Error::io(season_dir, e))
        })
        .collect::<Result<Vec<_>>>()?;

    let offset = offset_from_entries(&entries)?;
    tracing::debug!(
        "{} existing entries in {:?}, continuing after episode {}",
        entries.len(),
        season_dir,
        offset
    );
    Ok(offset)
}
