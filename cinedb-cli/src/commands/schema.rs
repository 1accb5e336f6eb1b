use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::cli_types::SchemaAction;

pub(crate) fn run_schema(db_path: &Path, action: SchemaAction) -> Result<(), CliError> {
    // Opening already brings the schema up to date.
    let conn = super::open_database(db_path)?;

    let message = match action {
        SchemaAction::Create => {
            cinedb_db::create_schema(&conn)
                .map_err(|e| CliError::database(format!("Failed to create schema: {}", e)))?;
            "Schema created."
        }
        SchemaAction::Drop => {
            cinedb_db::drop_schema(&conn)
                .map_err(|e| CliError::database(format!("Failed to drop schema: {}", e)))?;
            "Schema dropped."
        }
        SchemaAction::Clear => {
            cinedb_db::clear_data(&conn)
                .map_err(|e| CliError::database(format!("Failed to clear data: {}", e)))?;
            "All rows deleted."
        }
    };

    log::info!("{}", message.if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Database: {}", db_path.display());
    Ok(())
}
