use clap::Parser;
use log::info;

use crate::config::Config;
use crate::error::MigrateError;
use crate::runner::{self, Strategy};

#[derive(Parser)]
#[command(
    name = "marketplace-migrate",
    version,
    about = "Applies the Revolico import-fields migration to the listings table"
)]
pub struct Cli {
    /// Execution strategy: native driver or external psql client
    #[arg(long = "strategy", value_enum)]
    pub strategy: Option<Strategy>,

    /// Path to the migration SQL script
    #[arg(long = "sql-file", short = 'f')]
    pub sql_file: Option<String>,

    /// Connection URL (overrides DATABASE_URL and the config file)
    #[arg(long = "database-url")]
    pub database_url: Option<String>,
}

impl Cli {
    pub fn handle_command_line() -> Result<(), MigrateError> {
        let args = Cli::parse();

        let mut config = Config::load()?;
        args.apply_to(&mut config);

        info!("Using strategy {:?}", config.strategy);
        runner::run(&config)
    }

    fn apply_to(&self, config: &mut Config) {
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(sql_file) = &self.sql_file {
            config.sql_file = sql_file.clone();
        }
        if let Some(database_url) = &self.database_url {
            config.database_url = database_url.clone();
        }
    }
}
