//! The user-facing operations: create a show directory, file a movie,
//! populate a new season and add episodes to an existing one.
//!
//! Every operation validates all of its inputs before touching the
//! filesystem. Once moves start, failures are reported but earlier moves are
//! not undone.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::OrganizeConfig;
use crate::error::{Error, Result};
use crate::media::{self, MediaItem};
use crate::naming::{self, MovieDescriptor, SeasonDescriptor, ShowDescriptor};
use crate::rename_engine::{self, RenameConfig, RenameEngine, RenameReport};
use crate::sequence;
use crate::sorter::EpisodeSorter;

/// Episodes for a season that does not exist yet.
#[derive(Debug, Clone)]
pub struct SeasonRequest {
    pub season: u64,
    pub show_dir: PathBuf,
    pub episodes: Vec<PathBuf>,
    /// Overrides the configured match index.
    pub match_index: Option<usize>,
}

/// Episodes to append to an existing season directory.
#[derive(Debug, Clone)]
pub struct AdditionRequest {
    pub season_dir: PathBuf,
    pub episodes: Vec<PathBuf>,
    pub match_index: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Organizer {
    config: OrganizeConfig,
}

impl Organizer {
    pub fn new(config: OrganizeConfig) -> Self {
        Self { config }
    }

    /// Creates `"<name> (<year>) [tvdbid-<id>]"` under the descriptor's dir.
    pub fn make_show(&self, show: &ShowDescriptor) -> Result<PathBuf> {
        let path = show.path();
        fs::create_dir_all(&path).map_err(|e| Error::io(&path, e))?;
        tracing::info!("created show directory {:?}", path);
        Ok(path)
    }

    /// Moves a movie file to `"<name> (<year>) [tmdbid-<id>]<ext>"`.
    pub async fn add_movie(&self, movie: &MovieDescriptor) -> Result<PathBuf> {
        media::ensure_directory(&movie.dir)?;
        let item = MediaItem::discover(&movie.file)?;

        let target = movie.dir.join(movie.file_name(&item.extension));
        rename_engine::move_file(&item.path, &target).await?;
        tracing::info!("moved {:?} to {:?}", item.path, target);
        Ok(target)
    }

    /// Creates the season directory and numbers the episodes from `E01`.
    pub async fn populate_season(&self, request: &SeasonRequest) -> Result<RenameReport> {
        media::ensure_directory(&request.show_dir)?;
        let show = naming::show_name_from_directory(&request.show_dir)?;
        let items = MediaItem::discover_all(&request.episodes)?;
        let sorted = self.sorter(request.match_index)?.sort(items)?;

        let season = SeasonDescriptor::new(&request.show_dir, request.season);
        fs::create_dir(&season.path).map_err(|e| Error::io(&season.path, e))?;
        tracing::debug!("created season directory {:?}", season.path);

        let report = self
            .rename_batch(&season, show, &sorted, sequence::FRESH_SEASON_OFFSET)
            .await?;
        tracing::info!(
            "populated {:?} with {} episodes",
            season.path,
            report.renames.len()
        );
        Ok(report)
    }

    /// Appends episodes to a season, continuing after its last episode.
    pub async fn add_episodes(&self, request: &AdditionRequest) -> Result<RenameReport> {
        media::ensure_directory(&request.season_dir)?;
        let season = SeasonDescriptor::from_directory(&request.season_dir)?;
        let show_dir = request.season_dir.parent().unwrap_or(Path::new(""));
        let show = naming::show_name_from_directory(show_dir)?;
        let items = MediaItem::discover_all(&request.episodes)?;
        let sorted = self.sorter(request.match_index)?.sort(items)?;

        let offset = sequence::offset_for_directory(&season.path)?;
        let report = self.rename_batch(&season, show, &sorted, offset).await?;
        if let (Some(first), Some(last)) = (report.renames.first(), report.renames.last()) {
            tracing::info!(
                "added episodes {}-{} to {:?}",
                first.episode_number,
                last.episode_number,
                season.path
            );
        }
        Ok(report)
    }

    fn sorter(&self, match_index: Option<usize>) -> Result<EpisodeSorter> {
        EpisodeSorter::new(match_index.unwrap_or(self.config.match_index))
    }

    async fn rename_batch(
        &self,
        season: &SeasonDescriptor,
        show: String,
        sorted: &[MediaItem],
        offset: u64,
    ) -> Result<RenameReport> {
        let engine = RenameEngine::new(RenameConfig {
            season_dir: season.path.clone(),
            show,
            season_num: season.number,
            template: self.config.template(),
            concurrent: self.config.concurrent_renames,
        });
        let plan = engine.plan(sorted, offset)?;
        let results = engine.rename_files(&plan).await;
        rename_engine::summarize(results)
    }
}

impl Default for Organizer {
    fn default() -> Self {
        Self::new(OrganizeConfig::default())
    }
}
