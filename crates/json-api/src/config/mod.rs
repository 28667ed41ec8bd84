//! Server configuration module

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ListenConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Product Catalog JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "catalog-json", about = "Product Catalog JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ListenConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request tracing settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Catalog database settings.
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
    pub fn socket_addr(&self) -> SocketAddr {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_defaults_with_database_url() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "catalog-json",
            "--database-url",
            "postgres://localhost/catalog",
        ])?;

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.database.database_url, "postgres://localhost/catalog");
        assert_eq!(config.database.database_max_connections, 10);
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);

        Ok(())
    }

    #[test]
    fn flags_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "catalog-json",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--log-format",
            "json",
            "--database-url",
            "postgres://localhost/catalog",
            "--database-max-connections",
            "2",
        ])?;

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
        assert!(matches!(
            config.logging.log_format,
            observability::LogFormat::Json
        ));
        assert_eq!(config.database.database_max_connections, 2);

        Ok(())
    }

    #[test]
    fn rejects_host_that_is_not_an_address() {
        let result = ServerConfig::try_parse_from([
            "catalog-json",
            "--host",
            "not an address",
            "--database-url",
            "postgres://localhost/catalog",
        ]);

        assert!(result.is_err(), "expected host parse error");
    }
}
