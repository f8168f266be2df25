use anyhow::{Context, Result};
use clap::Parser;

use jellyfin_organize::cli::{self, Cli, Commands};
use jellyfin_organize::config;
use jellyfin_organize::naming::{MovieDescriptor, SeasonDescriptor, ShowDescriptor};
use jellyfin_organize::organizer::{AdditionRequest, Organizer, SeasonRequest};
use jellyfin_organize::rename_engine::RenameReport;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config_or_default(cli.config.as_deref())?;
    cli::init_tracing(cli.verbose, &config);

    let organizer = Organizer::new(config);

    match cli.command {
        Commands::Show {
            name,
            year,
            tvdbid,
            dir,
        } => {
            let show = ShowDescriptor::parse(&name, &year, &tvdbid, dir)?;
            let path = organizer
                .make_show(&show)
                .with_context(|| format!("Failed to create show {:?}", show.directory_name()))?;
            println!("{}", path.display());
        }
        Commands::Movie {
            name,
            year,
            tmdbid,
            dir,
            movie,
        } => {
            let movie = MovieDescriptor::parse(&name, &year, &tmdbid, dir, movie)?;
            let path = organizer.add_movie(&movie).await?;
            println!("{}", path.display());
        }
        Commands::Season {
            match_index,
            season,
            show_dir,
            episodes,
        } => {
            let request = SeasonRequest {
                season: SeasonDescriptor::parse_number(&season)?,
                show_dir,
                episodes,
                match_index,
            };
            print_report(&organizer.populate_season(&request).await?);
        }
        Commands::Add {
            match_index,
            season_dir,
            episodes,
        } => {
            let request = AdditionRequest {
                season_dir,
                episodes,
                match_index,
            };
            print_report(&organizer.add_episodes(&request).await?);
        }
    }

    Ok(())
}

fn print_report(report: &RenameReport) {
    for rename in &report.renames {
        println!("{} -> {}", rename.original_name, rename.new_name);
    }
}
