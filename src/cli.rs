use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{CONFIG_ENV, OrganizeConfig};

#[derive(Parser)]
#[command(
    name = "jellyfin-organize",
    version,
    about = "Organize shows and movies using the Jellyfin naming scheme"
)]
pub struct Cli {
    /// Path to a JSON config file
    #[arg(short, long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a show directory like "Series Name (2018) [tvdbid-65567]"
    Show {
        name: String,
        year: String,
        tvdbid: String,
        dir: PathBuf,
    },

    /// Move a movie to a file like "Film (2018) [tmdbid-65567].mkv"
    Movie {
        name: String,
        year: String,
        tmdbid: String,
        dir: PathBuf,
        movie: PathBuf,
    },

    /// Populate a new season directory with episodes
    Season {
        /// Index of the episode number among the numbers in each filename
        #[arg(short = 'm', long = "match-index")]
        match_index: Option<usize>,
        season: String,
        show_dir: PathBuf,
        #[arg(required = true)]
        episodes: Vec<PathBuf>,
    },

    /// Add episodes to a season directory, continuing after the last episode
    Add {
        /// Index of the episode number among the numbers in each filename
        #[arg(short = 'm', long = "match-index")]
        match_index: Option<usize>,
        season_dir: PathBuf,
        #[arg(required = true)]
        episodes: Vec<PathBuf>,
    },
}

/// Arguments of the torrent client completion hook.
#[derive(Parser)]
#[command(
    name = "torrent-done",
    version,
    about = "File a completed torrent download as the next episode of its show"
)]
pub struct TorrentDoneCli {
    /// Library directory holding the show directories
    pub library_dir: PathBuf,

    /// Directory the torrent was downloaded into
    #[arg(long, env = "TR_TORRENT_DIR")]
    pub torrent_dir: PathBuf,

    /// Name of the downloaded torrent
    #[arg(long, env = "TR_TORRENT_NAME")]
    pub torrent_name: String,

    /// Path to a JSON config file
    #[arg(short, long, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Print debug output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Installs the log subscriber. `RUST_LOG` wins over the config file.
pub fn init_tracing(verbose: bool, config: &OrganizeConfig) {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .or_else(|| config.log_filter.clone())
        .unwrap_or_else(|| {
            if verbose {
                "jellyfin_organize=debug".to_string()
            } else {
                "jellyfin_organize=info".to_string()
            }
        });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_season_command() {
        let cli = Cli::try_parse_from([
            "jellyfin-organize",
            "season",
            "-m",
            "1",
            "4",
            "/media/shows/Breaking Bad (2008) [tvdbid-81189]",
            "/dl/s4ep1.mkv",
            "/dl/s4ep2.mkv",
        ])
        .unwrap();

        match cli.command {
            Commands::Season {
                match_index,
                season,
                episodes,
                ..
            } => {
                assert_eq!(match_index, Some(1));
                assert_eq!(season, "4");
                assert_eq!(episodes.len(), 2);
            }
            _ => panic!("expected season command"),
        }
    }

    #[test]
    fn test_add_requires_episodes() {
        let result = Cli::try_parse_from(["jellyfin-organize", "add", "/media/Season 03"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_torrent_done_flags() {
        let cli = TorrentDoneCli::try_parse_from([
            "torrent-done",
            "/media/shows",
            "--torrent-dir",
            "/downloads",
            "--torrent-name",
            "The Office S03E05.mkv",
        ])
        .unwrap();
        assert_eq!(cli.library_dir, PathBuf::from("/media/shows"));
        assert_eq!(cli.torrent_name, "The Office S03E05.mkv");
    }
}
