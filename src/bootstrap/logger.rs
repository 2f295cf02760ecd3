//! Logging initialisation via tracing-subscriber.
//!
//! The level is fixed by the caller; `RUST_LOG` is never consulted. Call
//! [`init`] once at startup, before the first log line.

use tracing::level_filters::LevelFilter;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Severity threshold the bootstrap always runs at.
pub const DEFAULT_LEVEL: &str = "info";

/// Build a subscriber that emits everything at `level` or above to `writer`,
/// without installing it. Tests pair this with
/// [`tracing::subscriber::with_default`].
pub fn subscriber<W>(level: &str, writer: W) -> Result<impl Subscriber + Send + Sync + 'static, AppError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let level = parse_level(level)?;
    let filter = EnvFilter::default().add_directive(level.into());

    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .finish())
}

/// Install the process-wide subscriber, writing to stderr.
pub fn init(level: &str) -> Result<(), AppError> {
    subscriber(level, BoxMakeWriter::new(std::io::stderr))?
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))
}

/// Parse a log level string into a [`LevelFilter`], returning an error on
/// unrecognised values.
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    if level.is_empty() {
        return Err(AppError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}
