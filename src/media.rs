use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A source file discovered for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub path: PathBuf,
    pub file_name: String,
    /// Extension including the leading dot, or empty.
    pub extension: String,
}

impl MediaItem {
    /// Checks that `path` exists and is not a directory.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;
        if metadata.is_dir() {
            return Err(Error::IsADirectory {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            extension: extension_of(path),
        })
    }

    /// Discovers a whole batch, failing on the first bad path.
    pub fn discover_all<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Self>> {
        if paths.is_empty() {
            return Err(Error::NoEpisodesFound);
        }
        paths.iter().map(Self::discover).collect()
    }
}

/// `".mkv"` for `"ep1.mkv"`, empty when there is no extension.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default()
}

/// Checks that `path` exists and is a directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
