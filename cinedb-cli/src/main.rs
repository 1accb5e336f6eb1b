//! cinedb CLI
//!
//! Command-line interface for the movie industry database.

mod cli_types;
mod commands;
mod error;
mod settings;

use std::io::Write;

use clap::Parser;
use log::{Level, LevelFilter};

use cli_types::{Cli, Commands};
use commands::open_database;
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let db_path = settings::resolve_database_path(cli.db);

    match cli.command {
        Commands::Config { action } => commands::config::run_config(action, &db_path),
        Commands::Schema { action } => commands::schema::run_schema(&db_path, action),
        Commands::Critic { action } => {
            commands::entity::run_critic(&open_database(&db_path)?, action)
        }
        Commands::Actor { action } => {
            commands::entity::run_actor(&open_database(&db_path)?, action)
        }
        Commands::Movie { action } => {
            commands::entity::run_movie(&open_database(&db_path)?, action)
        }
        Commands::Studio { action } => {
            commands::entity::run_studio(&open_database(&db_path)?, action)
        }
        Commands::Rate {
            movie,
            critic_id,
            rating,
        } => commands::relation::run_rate(&open_database(&db_path)?, &movie, critic_id, rating),
        Commands::Unrate { movie, critic_id } => {
            commands::relation::run_unrate(&open_database(&db_path)?, &movie, critic_id)
        }
        Commands::Cast {
            movie,
            actor_id,
            salary,
            roles,
        } => {
            let conn = open_database(&db_path)?;
            commands::relation::run_cast(&conn, &movie, actor_id, salary, &roles)
        }
        Commands::Uncast { movie, actor_id } => {
            commands::relation::run_uncast(&open_database(&db_path)?, &movie, actor_id)
        }
        Commands::Produce {
            studio_id,
            movie,
            budget,
            revenue,
        } => {
            let conn = open_database(&db_path)?;
            commands::relation::run_produce(&conn, studio_id, &movie, budget, revenue)
        }
        Commands::Unproduce { studio_id, movie } => {
            commands::relation::run_unproduce(&open_database(&db_path)?, studio_id, &movie)
        }
        Commands::Report { report } => {
            commands::report::run_report(&open_database(&db_path)?, report)
        }
        Commands::Seed { path } => commands::seed::run_seed(&open_database(&db_path)?, &path),
        Commands::Stats => commands::stats::run_stats(&open_database(&db_path)?, &db_path),
    }
}

/// Install the logger. `RUST_LOG` overrides the level picked by the flags.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout);
    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        });
    }
    builder.parse_default_env();
    builder.init();
}

/// Emit an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
