//! Completion hook for Transmission's `script-torrent-done-filename`.
//! The client exports `TR_TORRENT_DIR` and `TR_TORRENT_NAME`.

use anyhow::{Context, Result};
use clap::Parser;

use jellyfin_organize::cli::{self, TorrentDoneCli};
use jellyfin_organize::config;
use jellyfin_organize::organizer::Organizer;
use jellyfin_organize::torrent::{self, CompletedTorrent};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = TorrentDoneCli::parse();
    let config = config::load_config_or_default(cli.config.as_deref())?;
    cli::init_tracing(cli.verbose, &config);

    let organizer = Organizer::new(config);
    let completed = CompletedTorrent {
        download_dir: cli.torrent_dir,
        name: cli.torrent_name,
    };

    let report = torrent::file_completed_torrent(&organizer, &cli.library_dir, &completed)
        .await
        .with_context(|| format!("Failed to file {:?}", completed.name))?;
    for rename in &report.renames {
        println!("{} -> {}", rename.original_name, rename.new_name);
    }
    Ok(())
}
