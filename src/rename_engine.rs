use std::io;
use std::path::{Path, PathBuf};

use tokio::task::JoinSet;

use crate::error::{Error, Result};
use crate::media::MediaItem;
use crate::naming::EpisodeTemplate;

#[derive(Debug, Clone)]
pub struct RenameConfig {
    pub season_dir: PathBuf,
    pub show: String,
    pub season_num: u64,
    pub template: EpisodeTemplate,
    /// Move every file in its own task instead of one after another.
    pub concurrent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRename {
    pub original_path: PathBuf,
    pub original_name: String,
    pub new_name: String,
    pub episode_number: u64,
}

#[derive(Debug, Clone)]
pub struct RenameResult {
    pub file_rename: FileRename,
    pub success: bool,
    pub error_message: Option<String>,
}

impl RenameResult {
    fn succeeded(file_rename: FileRename) -> Self {
        Self {
            file_rename,
            success: true,
            error_message: None,
        }
    }

    fn failed(file_rename: FileRename, message: impl Into<String>) -> Self {
        Self {
            file_rename,
            success: false,
            error_message: Some(message.into()),
        }
    }
}

/// Every rename of a batch that completed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameReport {
    pub renames: Vec<FileRename>,
}

#[derive(Debug)]
pub struct RenameEngine {
    config: RenameConfig,
}

impl RenameEngine {
    pub fn new(config: RenameConfig) -> Self {
        Self { config }
    }

    /// Assigns episode `offset + i + 1` to the item at sorted position `i`.
    pub fn plan(&self, items: &[MediaItem], offset: u64) -> Result<Vec<FileRename>> {
        let overflow = || Error::EpisodeNumberOverflow {
            offset,
            count: items.len(),
        };
        let last = u64::try_from(items.len())
            .ok()
            .and_then(|count| offset.checked_add(count))
            .ok_or_else(overflow)?;

        let plan = items
            .iter()
            .zip((offset..last).map(|n| n + 1))
            .map(|(item, episode_number)| {
                let new_name = self.config.template.render(
                    &self.config.show,
                    self.config.season_num,
                    episode_number,
                    &item.extension,
                );
                tracing::debug!("{} -> {}", item.file_name, new_name);
                FileRename {
                    original_path: item.path.clone(),
                    original_name: item.file_name.clone(),
                    new_name,
                    episode_number,
                }
            })
            .collect();
        Ok(plan)
    }

    pub async fn rename_file(&self, file_rename: &FileRename) -> RenameResult {
        move_into(self.config.season_dir.clone(), file_rename.clone()).await
    }

    /// Performs every move and waits for all of them. Results come back in
    /// the order of `files`; a failed move never stops the others.
    pub async fn rename_files(&self, files: &[FileRename]) -> Vec<RenameResult> {
        if !self.config.concurrent {
            let mut results = Vec::with_capacity(files.len());
            for file in files {
                results.push(self.rename_file(file).await);
            }
            return results;
        }

        let mut set = JoinSet::new();
        for (index, file) in files.iter().enumerate() {
            let season_dir = self.config.season_dir.clone();
            let file = file.clone();
            set.spawn(async move { (index, move_into(season_dir, file).await) });
        }

        let mut results: Vec<RenameResult> = files
            .iter()
            .map(|f| RenameResult::failed(f.clone(), "rename task did not complete"))
            .collect();
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((index, result)) => results[index] = result,
                Err(e) => tracing::warn!("rename task aborted: {}", e),
            }
        }
        results
    }
}

async fn move_into(season_dir: PathBuf, file_rename: FileRename) -> RenameResult {
    let target = season_dir.join(&file_rename.new_name);
    match move_file(&file_rename.original_path, &target).await {
        Ok(()) => RenameResult::succeeded(file_rename),
        Err(e) => RenameResult::failed(file_rename, e.to_string()),
    }
}

/// Moves `from` to `to` without overwriting. Falls back to copy and delete
/// when the two paths are on different filesystems.
pub async fn move_file(from: &Path, to: &Path) -> Result<()> {
    if matches!(tokio::fs::try_exists(to).await, Ok(true)) {
        return Err(Error::DestinationExists {
            path: to.to_path_buf(),
        });
    }

    match tokio::fs::rename(from, to).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            tokio::fs::copy(from, to)
                .await
                .map_err(|e| Error::io(from, e))?;
            tokio::fs::remove_file(from)
                .await
                .map_err(|e| Error::io(from, e))
        }
        Err(e) => Err(Error::io(from, e)),
    }
}

/// Turns per-file results into a report, or an error naming the first
/// failure. Moves that succeeded stay where they are.
pub fn summarize(results: Vec<RenameResult>) -> Result<RenameReport> {
    let total = results.len();
    let mut renames = Vec::with_capacity(total);
    let mut failures = Vec::new();

    for result in results {
        if result.success {
            renames.push(result.file_rename);
        } else {
            let message = result.error_message.unwrap_or_default();
            tracing::warn!(
                "failed to rename {:?} to {:?}: {}",
                result.file_rename.original_path,
                result.file_rename.new_name,
                message
            );
            failures.push(message);
        }
    }

    match failures.first() {
        None => Ok(RenameReport { renames }),
        Some(first) => Err(Error::RenameFailed {
            failed: failures.len(),
            total,
            first: first.clone(),
        }),
    }
}
