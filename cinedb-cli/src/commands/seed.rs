use std::path::Path;

use cinedb_db::Connection;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) fn run_seed(conn: &Connection, path: &Path) -> Result<(), CliError> {
    log::info!("Seeding from {}", path.display());

    let stats = cinedb_db::seed_from_file(conn, path)?;

    log::info!(
        "{}",
        "Seed complete".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Inserted: {:>6}", stats.inserted);
    if stats.skipped > 0 {
        log::info!(
            "  Skipped:  {:>6} {}",
            stats.skipped,
            "(already present)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}
