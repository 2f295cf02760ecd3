//! Container startup bootstrap.
//!
//! Announces startup on the structured log, then runs a fixed, ordered list of
//! diagnostic filesystem probes whose raw output goes straight to the
//! process's stdout/stderr. The binary entry point is `src/main.rs`.

mod core;
pub mod bootstrap;

pub use crate::core::{error, manifest};
pub use bootstrap::{logger, probe, sequencer};
