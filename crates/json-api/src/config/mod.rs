//! Server configuration module

use clap::Parser;

use crate::config::{db::DatabaseConfig, logging::LoggingConfig, server::ServerRuntimeConfig};

pub(crate) mod db;
pub(crate) mod logging;
pub(crate) mod server;

/// Coupons JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "coupons-json", about = "Coupons JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::config::logging::LogFormat;

    #[test]
    fn defaults_apply_when_only_database_url_given() -> TestResult {
        let config =
            ServerConfig::try_parse_from(["coupons-json", "--database-url", "postgres://db"])?;

        assert_eq!(config.database.database_url, "postgres://db");
        assert!(config.database.run_migrations);
        assert!(matches!(config.logging.log_format, LogFormat::Compact));

        Ok(())
    }

    #[test]
    fn socket_addr_joins_host_and_port() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "coupons-json",
            "--database-url",
            "postgres://db",
            "-H",
            "127.0.0.1",
            "--port",
            "9000",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:9000");

        Ok(())
    }
}
