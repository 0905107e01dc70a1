use std::fs;
use std::path::Path;

use clap::ValueEnum;
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::driver;
use crate::error::MigrateError;
use crate::psql;
use crate::target::ConnectionTarget;

/// How the SQL batch reaches the database. Selected once at startup from
/// configuration; there is no runtime probing or fallback between the two.
#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Connect directly with the native postgres driver
    Driver,
    /// Spawn the external psql command-line client
    Psql,
}

// Operator-visible step lines. These describe the batch in migrate.sql;
// execution itself is a single opaque batch, not six tracked operations.
const STEP_LINES: [&str; 6] = [
    "1. Making seller_id nullable...",
    "2. Adding source column...",
    "3. Adding revolico_id column...",
    "4. Adding scraped_at column...",
    "5. Creating index on revolico_id...",
    "6. Creating index on source...",
];

/// Static success summary. It is not derived from the executed SQL: if
/// migrate.sql changes, this text must be updated by hand to match.
const SUCCESS_SUMMARY: &str = "\
✅ Migration completed successfully!
Added columns:
  - source (TEXT, default: 'user')
  - revolico_id (TEXT)
  - scraped_at (TIMESTAMP)
Modified columns:
  - seller_id (now nullable)
Created indexes:
  - idx_listings_revolico_id
  - idx_listings_source";

/// Runs the migration end to end: parse the connection target, read the
/// SQL script, apply it via the configured strategy, print the summary.
///
/// The SQL file is read before any connection is attempted, so a missing
/// script never touches the database.
pub fn run(config: &Config) -> Result<(), MigrateError> {
    let target = ConnectionTarget::parse(&config.database_url)?;

    println!("Starting migration for Revolico import fields...");
    println!("Database: {target}");

    let sql_path = Path::new(&config.sql_file);
    let sql = fs::read_to_string(sql_path).map_err(|e| {
        MigrateError::Error(format!(
            "Cannot read SQL file {}: {e}",
            sql_path.display()
        ))
    })?;

    for line in STEP_LINES {
        println!("{line}");
    }

    match config.strategy {
        Strategy::Driver => driver::apply(&target, &sql)?,
        Strategy::Psql => psql::apply(&target, sql_path)?,
    }

    println!("\n{SUCCESS_SUMMARY}");
    info!("Migration finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(sql_file: &str, strategy: Strategy) -> Config {
        Config {
            database_url: "postgresql://postgres@127.0.0.1:9/none".to_string(),
            sql_file: sql_file.to_string(),
            strategy,
        }
    }

    #[test]
    fn test_missing_sql_file_fails_before_connecting() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such.sql");
        let config = config_with(&missing.display().to_string(), Strategy::Driver);

        let err = run(&config).unwrap_err();
        let message = err.to_string();
        assert!(
            message.contains("Cannot read SQL file"),
            "unexpected error: {message}"
        );
        // A connection attempt would have surfaced as a database error
        assert!(!message.contains("Database error"));
    }

    #[test]
    fn test_invalid_url_fails_before_reading_file() {
        let config = Config {
            database_url: "not a url".to_string(),
            ..config_with("migrate.sql", Strategy::Driver)
        };
        assert!(matches!(
            run(&config).unwrap_err(),
            MigrateError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_psql_strategy_failure_is_external_client_error() {
        let dir = tempfile::tempdir().unwrap();
        let sql_path = dir.path().join("migrate.sql");
        std::fs::write(&sql_path, "SELECT 1;").unwrap();

        // Port 9 (discard) refuses connections; a missing psql binary fails
        // to launch. Either way the external-client path reports the error.
        let config = config_with(&sql_path.display().to_string(), Strategy::Psql);
        assert!(matches!(
            run(&config).unwrap_err(),
            MigrateError::ExternalClient(_)
        ));
    }
}
