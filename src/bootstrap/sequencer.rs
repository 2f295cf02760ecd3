//! Bootstrap sequencer — announce startup, then run every probe in order.
//!
//! ```text
//! Start → LoggingConfigured → Announced → ProbeRun(1) → … → ProbeRun(n) → Done
//! ```
//!
//! The sequencer never installs a subscriber itself: it logs through whatever
//! dispatcher is current, which the caller must set up first. Probe exit
//! statuses are ignored; only a probe that cannot be launched stops the run.

use tracing::{debug, info};

use crate::bootstrap::probe::ProbeRunner;
use crate::error::AppError;
use crate::manifest::Manifest;

/// Position in the bootstrap state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    LoggingConfigured,
    Announced,
    /// The n-th probe (1-based) has exited.
    ProbeRun(usize),
    Done,
}

/// Outcome of a completed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    pub stage: Stage,
    pub probes_run: usize,
}

pub struct Sequencer<'m, R> {
    manifest: &'m Manifest,
    runner: R,
    stage: Stage,
}

impl<'m, R: ProbeRunner> Sequencer<'m, R> {
    pub fn new(manifest: &'m Manifest, runner: R) -> Self {
        Self { manifest, runner, stage: Stage::Start }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Run the whole sequence. Logging must already be configured.
    pub fn run(mut self) -> Result<BootstrapReport, AppError> {
        self.advance(Stage::LoggingConfigured);

        info!("{}", self.manifest.startup_marker());
        self.advance(Stage::Announced);

        let mut probes_run = 0;
        for probe in &self.manifest.probes {
            if let Some(description) = &probe.description {
                info!("{description}");
            }
            debug!(command = %probe.command_line(), "running probe");

            // Exit status intentionally dropped.
            let _ = self.runner.run(probe)?;

            probes_run += 1;
            self.advance(Stage::ProbeRun(probes_run));
        }

        self.advance(Stage::Done);
        Ok(BootstrapReport { stage: self.stage, probes_run })
    }

    fn advance(&mut self, next: Stage) {
        debug!(from = ?self.stage, to = ?next, "bootstrap stage");
        self.stage = next;
    }
}

/// Convenience wrapper: run `manifest` with `runner` in one call.
pub fn run<R: ProbeRunner>(manifest: &Manifest, runner: R) -> Result<BootstrapReport, AppError> {
    Sequencer::new(manifest, runner).run()
}
