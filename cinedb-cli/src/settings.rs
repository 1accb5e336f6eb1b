//! Persistent CLI settings (database location, config file path).
//!
//! The settings file is `~/.config/cinedb/settings.toml`. Only the
//! `[database]` table is owned here; anything else in the file is left alone.

use std::io;
use std::path::{Path, PathBuf};

/// Canonical path to the settings file: `~/.config/cinedb/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("cinedb").join("settings.toml")
}

/// Database location used when nothing else is configured.
pub(crate) fn default_database_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("cinedb").join("cinedb.db")
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `database.path` in `settings.toml`
/// 3. `<data_dir>/cinedb/cinedb.db`
pub(crate) fn resolve_database_path(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_database_path() {
        return p;
    }
    default_database_path()
}

/// Read `database.path` from `settings.toml`, if set.
pub(crate) fn load_database_path() -> Option<PathBuf> {
    load_database_path_from(&settings_path())
}

fn load_database_path_from(settings: &Path) -> Option<PathBuf> {
    let doc = read_settings(settings);
    let path = doc.get("database")?.get("path")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Save (or clear) the database path in `settings.toml`.
///
/// Relative paths are stored absolute, so the saved database is the same
/// one no matter where `cinedb` is later run from.
pub(crate) fn save_database_path(path: Option<&Path>) -> io::Result<()> {
    save_database_path_to(&settings_path(), path)
}

fn save_database_path_to(settings: &Path, path: Option<&Path>) -> io::Result<()> {
    let path = match path {
        Some(p) if p.is_dir() => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is a directory, not a database file", p.display()),
            ));
        }
        Some(p) => Some(std::path::absolute(p)?),
        None => None,
    };

    edit_database_table(settings, |database| match path {
        Some(p) => {
            database.insert(
                "path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            database.remove("path");
        }
    })
}

/// Apply `edit` to the `[database]` table and write the file back.
///
/// Other tables are preserved. An emptied `[database]` table is removed.
fn edit_database_table(settings: &Path, edit: impl FnOnce(&mut toml::Table)) -> io::Result<()> {
    let mut doc = read_settings(settings);
    let database = doc
        .entry("database")
        .or_insert_with(|| toml::Value::Table(toml::Table::new()));
    let Some(table) = database.as_table_mut() else {
        return Err(io::Error::other("[database] in settings.toml is not a table"));
    };
    edit(table);
    if table.is_empty() {
        doc.remove("database");
    }

    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    write_atomically(settings, &serialized)
}

/// Missing or unparsable settings read as an empty document.
fn read_settings(settings: &Path) -> toml::Table {
    std::fs::read_to_string(settings)
        .ok()
        .and_then(|contents| contents.parse().ok())
        .unwrap_or_default()
}

fn write_atomically(target: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = target.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, target)
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub(crate) fn load_settings_string() -> Option<String> {
    let doc = read_settings(&settings_path());
    if doc.is_empty() {
        return None;
    }
    toml::to_string_pretty(&doc).ok()
}
