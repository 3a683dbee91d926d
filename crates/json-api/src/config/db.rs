//! Database Config

use clap::{ArgAction, Args};

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Apply pending schema migrations on startup
    #[arg(
        long,
        env = "RUN_MIGRATIONS",
        action = ArgAction::Set,
        default_value_t = true
    )]
    pub run_migrations: bool,
}
