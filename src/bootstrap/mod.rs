//! Bootstrap layer — everything that runs before the runtime manager takes over.
//!
//! - **logger** — tracing-subscriber initialisation.
//! - **probe** — spawn-and-wait execution of a single probe.
//! - **sequencer** — the ordered startup sequence.

pub mod logger;
pub mod probe;
pub mod sequencer;
