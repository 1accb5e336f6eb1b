use std::path::Path;

use cinedb_db::Connection;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) fn run_stats(conn: &Connection, db_path: &Path) -> Result<(), CliError> {
    let stats = cinedb_db::database_stats(conn)
        .map_err(|e| CliError::database(format!("Failed to query database stats: {}", e)))?;

    log::info!(
        "{}",
        "Database Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", db_path.display());
    crate::log_blank();
    log::info!("  Critics:      {:>8}", stats.critics);
    log::info!("  Actors:       {:>8}", stats.actors);
    log::info!("  Movies:       {:>8}", stats.movies);
    log::info!("  Studios:      {:>8}", stats.studios);
    log::info!("  Ratings:      {:>8}", stats.ratings);
    log::info!("  Casts:        {:>8}", stats.casts);
    log::info!("  Roles:        {:>8}", stats.roles);
    log::info!("  Productions:  {:>8}", stats.productions);

    Ok(())
}
