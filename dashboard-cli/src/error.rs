//! Error types

use std::path::PathBuf;

use dashboard_lib::DashboardError;

/// Errors surfaced to the user by the command-line front end.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A file could not be read or written.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid.
    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Rows could not be loaded, or pagination was misconfigured.
    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    /// A `FIELD=VALUE` filter without `=`.
    #[error("invalid filter '{0}', expected FIELD=VALUE")]
    InvalidFilter(String),

    /// An interactive command that could not be parsed.
    #[error("unknown command '{0}' (try 'h' for help)")]
    InvalidCommand(String),

    /// Reading from stdin or writing to stdout failed.
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),

    /// The logger could not be installed.
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
