//! Error types for jellyfin-organize.

use std::path::{Path, PathBuf};

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while organizing shows, seasons and movies.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A show directory name lacks the `" ("` year separator.
    #[error("invalid show directory {}", path.display())]
    InvalidShowDirectory { path: PathBuf },

    /// A season directory name is not `"Season <N>"`.
    #[error("invalid season directory {}", path.display())]
    InvalidSeasonDirectory { path: PathBuf },

    /// A filename contains no digit runs at all.
    #[error("episode {name:?} must contain a number")]
    NoNumericToken { name: String },

    /// A filename has fewer digit runs than the match index requires.
    #[error("invalid match index {index} for {name:?} ({available} numbers found)")]
    InvalidMatchIndex {
        index: usize,
        name: String,
        available: usize,
    },

    /// A digit run does not fit in an unsigned 64-bit integer.
    #[error("number {token} in {name:?} is too large")]
    TokenOutOfRange { name: String, token: String },

    /// The last season entry has no `E<digits>.` marker.
    #[error("invalid episode {name:?}")]
    InvalidEpisode { name: String },

    /// The digits between `E` and `.` do not fit in an unsigned 64-bit
    /// integer.
    #[error("invalid episode number in {name:?}")]
    InvalidEpisodeNumber { name: String },

    /// Numbering `count` episodes after `offset` would run past `u64::MAX`.
    #[error("cannot number {count} episodes after episode {offset}")]
    EpisodeNumberOverflow { offset: u64, count: usize },

    /// The input batch is empty.
    #[error("no episodes found")]
    NoEpisodesFound,

    #[error("empty {kind} name")]
    EmptyName { kind: &'static str },

    #[error("invalid year {value:?}")]
    InvalidYear { value: String },

    #[error("invalid {kind} {value:?}")]
    InvalidId { kind: &'static str, value: String },

    #[error("invalid season {value:?}")]
    InvalidSeasonNumber { value: String },

    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("{} is a directory", path.display())]
    IsADirectory { path: PathBuf },

    /// A move would overwrite an existing file.
    #[error("{} already exists", path.display())]
    DestinationExists { path: PathBuf },

    /// No show directory matches a torrent name.
    #[error("no show directory for {name:?}")]
    NoShowDirectory { name: String },

    #[error("no season directory in {}", path.display())]
    NoSeasonDirectory { path: PathBuf },

    /// Some moves in a batch failed; successful ones are not rolled back.
    #[error("{failed} of {total} renames failed, first error: {first}")]
    RenameFailed {
        failed: usize,
        total: usize,
        first: String,
    },

    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// A filesystem operation failed on `path`.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an I/O error with the path it failed on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
