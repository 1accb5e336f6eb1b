use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::cli_types::ConfigAction;
use crate::settings;

pub(crate) fn run_config(action: ConfigAction, db_path: &Path) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => {
            run_config_show(db_path);
            Ok(())
        }
        ConfigAction::Path => {
            log::info!("{}", settings::settings_path().display());
            Ok(())
        }
        ConfigAction::SetDb { path } => run_config_set_db(path),
        ConfigAction::ClearDb => {
            settings::save_database_path(None)
                .map_err(|e| CliError::config(format!("Failed to update settings: {}", e)))?;
            log::info!(
                "Saved database path cleared; using {}",
                settings::default_database_path().display(),
            );
            Ok(())
        }
    }
}

/// Show the settings file and how the database path was resolved.
fn run_config_show(db_path: &Path) {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "cinedb Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let source = match settings::load_database_path() {
        Some(saved) if saved == db_path => "(settings)",
        _ if db_path == settings::default_database_path() => "(default)",
        _ => "(--db)",
    };
    log::info!(
        "  Database:      {} {}",
        db_path.display().if_supports_color(Stdout, |t| t.cyan()),
        source.if_supports_color(Stdout, |t| t.dimmed()),
    );

    if let Some(contents) = settings::load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {}", line);
        }
    }
}

fn run_config_set_db(path: PathBuf) -> Result<(), CliError> {
    settings::save_database_path(Some(&path))
        .map_err(|e| CliError::config(format!("Failed to update settings: {}", e)))?;

    let saved = settings::load_database_path().unwrap_or(path);
    log::info!(
        "Database path saved: {}",
        saved.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!("  Settings file: {}", settings::settings_path().display());
    Ok(())
}
