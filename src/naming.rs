//! Jellyfin naming scheme: show, season, episode and movie names.
//!
//! Show directories look like `"Series Name (2018) [tvdbid-65567]"`, season
//! directories like `"Season 01"`, episodes like `"Series Name S01E01.mkv"`
//! and movies like `"Film (2018) [tmdbid-65567].mkv"`.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Separates the show name from the premiere year in a show directory.
pub const YEAR_SEPARATOR: &str = " (";

/// Leading text of every season directory.
pub const SEASON_PREFIX: &str = "Season ";

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Extracts the show name from a show directory like
/// `"The Office (2005) [tvdbid-73244]"`.
pub fn show_name_from_directory(path: &Path) -> Result<String> {
    let base = base_name(path);
    match base.split_once(YEAR_SEPARATOR) {
        Some((show, _)) => Ok(show.to_string()),
        None => Err(Error::InvalidShowDirectory {
            path: path.to_path_buf(),
        }),
    }
}

/// Extracts the season number from a season directory like `"Season 03"`.
pub fn season_from_directory(path: &Path) -> Result<u64> {
    let base = base_name(path);
    base.strip_prefix(SEASON_PREFIX)
        .and_then(|n| n.parse::<u64>().ok())
        .ok_or_else(|| Error::InvalidSeasonDirectory {
            path: path.to_path_buf(),
        })
}

/// Directory name for a season, zero-padded to two digits.
pub fn season_directory_name(season: u64) -> String {
    format!("{}{:02}", SEASON_PREFIX, season)
}

fn parse_name(kind: &'static str, name: &str) -> Result<String> {
    if name.is_empty() {
        return Err(Error::EmptyName { kind });
    }
    Ok(name.to_string())
}

fn parse_year(year: &str) -> Result<u32> {
    year.parse().map_err(|_| Error::InvalidYear {
        value: year.to_string(),
    })
}

fn parse_id(kind: &'static str, id: &str) -> Result<u64> {
    id.parse().map_err(|_| Error::InvalidId {
        kind,
        value: id.to_string(),
    })
}

/// A TV show directory to create under `dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowDescriptor {
    pub name: String,
    pub year: u32,
    pub tvdb_id: u64,
    pub dir: PathBuf,
}

impl ShowDescriptor {
    /// Validates raw command-line values.
    pub fn parse(name: &str, year: &str, tvdb_id: &str, dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            name: parse_name("show", name)?,
            year: parse_year(year)?,
            tvdb_id: parse_id("TVDBID", tvdb_id)?,
            dir: dir.into(),
        })
    }

    pub fn directory_name(&self) -> String {
        format!("{} ({}) [tvdbid-{}]", self.name, self.year, self.tvdb_id)
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(self.directory_name())
    }
}

/// A movie file to move into `dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDescriptor {
    pub name: String,
    pub year: u32,
    pub tmdb_id: u64,
    pub dir: PathBuf,
    pub file: PathBuf,
}

impl MovieDescriptor {
    pub fn parse(
        name: &str,
        year: &str,
        tmdb_id: &str,
        dir: impl Into<PathBuf>,
        file: impl Into<PathBuf>,
    ) -> Result<Self> {
        Ok(Self {
            name: parse_name("movie", name)?,
            year: parse_year(year)?,
            tmdb_id: parse_id("TMDBID", tmdb_id)?,
            dir: dir.into(),
            file: file.into(),
        })
    }

    /// Target file name, keeping the source extension.
    pub fn file_name(&self, extension: &str) -> String {
        format!(
            "{} ({}) [tmdbid-{}]{}",
            self.name, self.year, self.tmdb_id, extension
        )
    }
}

/// A season directory with its parsed number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonDescriptor {
    pub number: u64,
    pub path: PathBuf,
}

impl SeasonDescriptor {
    /// The season directory `show_dir` would get for `number`.
    pub fn new(show_dir: &Path, number: u64) -> Self {
        Self {
            number,
            path: show_dir.join(season_directory_name(number)),
        }
    }

    /// Validates an existing season directory name.
    pub fn from_directory(path: &Path) -> Result<Self> {
        Ok(Self {
            number: season_from_directory(path)?,
            path: path.to_path_buf(),
        })
    }

    /// Parses a season number given as text, e.g. on the command line.
    pub fn parse_number(value: &str) -> Result<u64> {
        value.parse().map_err(|_| Error::InvalidSeasonNumber {
            value: value.to_string(),
        })
    }
}

/// Episode file naming. Jellyfin accepts both `"Show S01E01.mkv"` and
/// `"S01E01.mkv"`; which one is written is a deployment choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeTemplate {
    pub include_show_name: bool,
}

impl EpisodeTemplate {
    pub fn render(&self, show: &str, season: u64, episode: u64, extension: &str) -> String {
        if self.include_show_name {
            format!("{} S{:02}E{:02}{}", show, season, episode, extension)
        } else {
            format!("S{:02}E{:02}{}", season, episode, extension)
        }
    }
}

impl Default for EpisodeTemplate {
    fn default() -> Self {
        Self {
            include_show_name: true,
        }
    }
}
