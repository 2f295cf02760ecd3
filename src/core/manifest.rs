//! Probe manifest — the fixed, ordered list of diagnostic probes.
//!
//! The manifest is TOML compiled into the binary from `config/probes.toml`,
//! so the probe list is data but still fixed at build time. Nothing is read
//! from disk or the environment at run time.
//!
//! ```toml
//! product = "Mendix Cloud Foundry Buildpack"
//!
//! [[probe]]
//! description = "scanning for newrelic"   # optional
//! command = "find"
//! args = ["/", "-name", "newrelic"]
//! ```

use serde::Deserialize;

use crate::error::AppError;

/// Built-in manifest source.
pub const BUILTIN: &str = include_str!("../../config/probes.toml");

/// One external diagnostic invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    /// Logged at `info` before the probe runs. `None` means run silently.
    pub description: Option<String>,
    pub command: String,
    pub args: Vec<String>,
}

impl Probe {
    pub fn new<I, S>(command: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            description: None,
            command: command.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// `command arg1 arg2 …`, for log fields and error messages.
    pub fn command_line(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Fully-resolved manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Product name announced in the startup marker.
    pub product: String,
    /// Probes in execution order.
    pub probes: Vec<Probe>,
}

impl Manifest {
    /// Parse the compiled-in manifest.
    pub fn builtin() -> Result<Self, AppError> {
        from_str(BUILTIN)
    }

    /// The single line announcing that the bootstrap has begun.
    pub fn startup_marker(&self) -> String {
        format!("Started {}", self.product)
    }
}

/// Raw TOML shape — `serde` target before resolution.
#[derive(Deserialize)]
struct RawManifest {
    product: String,
    #[serde(default, rename = "probe")]
    probes: Vec<RawProbe>,
}

#[derive(Deserialize)]
struct RawProbe {
    #[serde(default)]
    description: Option<String>,
    command: String,
    #[serde(default)]
    args: Vec<String>,
}

/// Parse and validate a manifest.
pub fn from_str(source: &str) -> Result<Manifest, AppError> {
    let raw: RawManifest = toml::from_str(source)
        .map_err(|e| AppError::Manifest(format!("parse error: {e}")))?;

    let product = raw.product.trim().to_string();
    if product.is_empty() {
        return Err(AppError::Manifest("product must not be empty".into()));
    }
    if raw.probes.is_empty() {
        return Err(AppError::Manifest("at least one [[probe]] is required".into()));
    }

    let probes = raw
        .probes
        .into_iter()
        .enumerate()
        .map(|(idx, p)| {
            let command = p.command.trim().to_string();
            if command.is_empty() {
                return Err(AppError::Manifest(format!(
                    "probe #{} has an empty command",
                    idx + 1
                )));
            }
            // Blank descriptions behave like missing ones.
            let description = p
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty());
            Ok(Probe { description, command, args: p.args })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Manifest { product, probes })
}
