pub(crate) mod config;
pub(crate) mod entity;
pub(crate) mod relation;
pub(crate) mod report;
pub(crate) mod schema;
pub(crate) mod seed;
pub(crate) mod stats;

use std::path::Path;

use cinedb_db::{Connection, OperationError, ReturnValue};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Open (creating if needed) the database at `db_path`.
pub(crate) fn open_database(db_path: &Path) -> Result<Connection, CliError> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    log::debug!("Opening database {}", db_path.display());
    cinedb_db::open_database(db_path).map_err(|e| {
        CliError::database(format!("Failed to open {}: {}", db_path.display(), e))
    })
}

/// Print the result code of a write operation.
///
/// Success prints `OK`; any other code is returned as a `CliError` so the
/// process exits non-zero.
pub(crate) fn report_outcome(result: Result<(), OperationError>) -> Result<(), CliError> {
    match result {
        Ok(()) => {
            log::info!(
                "{}",
                ReturnValue::Ok
                    .as_str()
                    .if_supports_color(Stdout, |t| t.green()),
            );
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
