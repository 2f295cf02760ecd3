//! startup-probe — container bootstrap entry point.
//!
//! Startup sequence:
//!   1. Init logger at the fixed `info` level
//!   2. Parse the compiled-in probe manifest
//!   3. Log the startup marker
//!   4. Run each probe in order, blocking on each
//!   5. Fall through to the runtime manager
//!
//! No arguments or environment variables are read.

use startup_probe::{error::AppError, logger, manifest::Manifest, probe::SystemRunner, sequencer};
use tracing::debug;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    logger::init(logger::DEFAULT_LEVEL)?;

    let manifest = Manifest::builtin()?;
    let report = sequencer::run(&manifest, SystemRunner)?;

    debug!(probes_run = report.probes_run, "bootstrap complete");
    Ok(())
}
