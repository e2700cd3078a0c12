//! Logging settings

use clap::Args;

/// Log line layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// One line per event, for a terminal
    Compact,

    /// JSON objects with span context, for log shippers
    Json,
}

/// How the server reports what it is doing.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset, e.g. `info` or `thali_app=debug`
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Log line layout
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Requests slower than this many milliseconds are logged as warnings
    #[arg(
        long,
        env = "SLOW_REQUEST_THRESHOLD_MS",
        default_value_t = 1_000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub slow_request_threshold_ms: u64,
}
