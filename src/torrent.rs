//! Files a finished torrent download as the next episode of its show.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::naming::{self, SEASON_PREFIX, YEAR_SEPARATOR};
use crate::organizer::{AdditionRequest, Organizer};
use crate::rename_engine::RenameReport;

/// A completed download, as reported by the torrent client.
#[derive(Debug, Clone)]
pub struct CompletedTorrent {
    /// Directory the torrent was downloaded into.
    pub download_dir: PathBuf,
    /// File name of the torrent inside `download_dir`.
    pub name: String,
}

impl CompletedTorrent {
    pub fn path(&self) -> PathBuf {
        self.download_dir.join(&self.name)
    }
}

fn sorted_directories(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let is_dir = entry
            .file_type()
            .map(|ft| ft.is_dir())
            .map_err(|e| Error::io(entry.path(), e))?;
        if is_dir {
            dirs.push((entry.file_name().to_string_lossy().to_string(), entry.path()));
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// First show directory under `library_dir` whose show name appears in
/// `torrent_name`.
pub fn find_show_directory(library_dir: &Path, torrent_name: &str) -> Result<PathBuf> {
    sorted_directories(library_dir)?
        .into_iter()
        .find(|(name, _)| match name.split_once(YEAR_SEPARATOR) {
            Some((show, _)) => torrent_name.contains(show),
            None => false,
        })
        .map(|(_, path)| path)
        .ok_or_else(|| Error::NoShowDirectory {
            name: torrent_name.to_string(),
        })
}

/// The numerically highest `"Season N"` directory of a show.
pub fn latest_season_directory(show_dir: &Path) -> Result<PathBuf> {
    let mut latest: Option<(u64, PathBuf)> = None;
    for (name, path) in sorted_directories(show_dir)? {
        if !name.starts_with(SEASON_PREFIX) {
            continue;
        }
        let season = naming::season_from_directory(&path)?;
        if latest.as_ref().is_none_or(|(n, _)| season > *n) {
            latest = Some((season, path));
        }
    }

    latest
        .map(|(_, path)| path)
        .ok_or_else(|| Error::NoSeasonDirectory {
            path: show_dir.to_path_buf(),
        })
}

/// Resolves the show and season for `torrent` and appends it as the next
/// episode there.
pub async fn file_completed_torrent(
    organizer: &Organizer,
    library_dir: &Path,
    torrent: &CompletedTorrent,
) -> Result<RenameReport> {
    crate::media::ensure_directory(library_dir)?;
    let show_dir = find_show_directory(library_dir, &torrent.name)?;
    let season_dir = latest_season_directory(&show_dir)?;
    tracing::info!("filing {:?} into {:?}", torrent.name, season_dir);

    let request = AdditionRequest {
        season_dir,
        episodes: vec![torrent.path()],
        match_index: None,
    };
    organizer.add_episodes(&request).await
}
