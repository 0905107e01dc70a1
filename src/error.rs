use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error), // Converts io::Error into MigrateError automatically

    #[error("Database error: {0}")]
    Database(#[from] postgres::Error), // Converts postgres::Error automatically

    #[error("Invalid connection URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("External client error: {0}")]
    ExternalClient(String), // psql could not be launched or exited non-zero

    #[error("Error: {0}")]
    Error(String), // Allows custom application errors
}
