//! Core types shared by the bootstrap layer.
//!
//! - **error** — application-wide error enum.
//! - **manifest** — the compiled-in probe list.

pub mod error;
pub mod manifest;
