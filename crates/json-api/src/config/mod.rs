//! Server configuration module

use clap::Parser;

use crate::config::{logging::LoggingConfig, seed::SeedConfig, server::ServerRuntimeConfig};

pub(crate) mod logging;
pub(crate) mod seed;
pub(crate) mod server;

pub(crate) use logging::LogFormat;

/// Thali JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "thali-json", about = "Thali JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Startup data.
    #[command(flatten)]
    pub seed: SeedConfig,
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

    #[test]
    fn defaults_apply_without_arguments() -> TestResult {
        let config = ServerConfig::try_parse_from(["thali-json"])?;

        assert_eq!(config.server.port, 8698);
        assert_eq!(config.server.shutdown_grace(), std::time::Duration::from_secs(10));
        assert_eq!(config.logging.log_format, LogFormat::Compact);
        assert!(config.seed.seed_menu, "menu seeding is on by default");
        assert!(config.seed.admin().is_none(), "no admin without credentials");

        Ok(())
    }

    #[test]
    fn admin_needs_both_username_and_password() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "thali-json",
            "--admin-username",
            "root",
            "--admin-password",
            "hunter22",
            "--seed-menu",
            "false",
        ])?;

        assert_eq!(config.seed.admin(), Some(("root", "hunter22")));
        assert!(!config.seed.seed_menu, "seeding can be disabled");

        Ok(())
    }

    #[test]
    fn slow_request_threshold_must_be_positive() {
        let parsed = ServerConfig::try_parse_from([
            "thali-json",
            "--slow-request-threshold-ms",
            "0",
        ]);

        assert!(parsed.is_err(), "a zero threshold would flag every request");
    }
}
