//! Application-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("logger error: {0}")]
    Logger(String),

    #[error("manifest error: {0}")]
    Manifest(String),

    /// The probe command could not be started at all. Probes that start and
    /// then fail are not errors.
    #[error("failed to launch probe `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
