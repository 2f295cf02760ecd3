//! Probe execution — the seam between the sequencer and the operating system.

use std::process::{Command, ExitStatus, Stdio};

use crate::error::AppError;
use crate::manifest::Probe;

/// How a probe command finished. Recorded but never acted upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeExit {
    code: Option<i32>,
}

impl ProbeExit {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Terminated without an exit code (e.g. killed by a signal).
    pub fn terminated() -> Self {
        Self { code: None }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ProbeExit {
    fn from(status: ExitStatus) -> Self {
        Self { code: status.code() }
    }
}

/// Runs a single probe to completion.
///
/// Implementations block until the probe has exited. `Err` is reserved for
/// probes that could not be started.
pub trait ProbeRunner {
    fn run(&self, probe: &Probe) -> Result<ProbeExit, AppError>;
}

impl<R: ProbeRunner + ?Sized> ProbeRunner for &R {
    fn run(&self, probe: &Probe) -> Result<ProbeExit, AppError> {
        (**self).run(probe)
    }
}

/// Spawns the probe as a child process with inherited stdio and waits for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProbeRunner for SystemRunner {
    fn run(&self, probe: &Probe) -> Result<ProbeExit, AppError> {
        let status = Command::new(&probe.command)
            .args(&probe.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| AppError::Launch {
                command: probe.command_line(),
                source,
            })?;
        Ok(status.into())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn zero_exit_is_success() {
        let exit = SystemRunner.run(&Probe::new("true", Vec::<String>::new())).unwrap();
        assert!(exit.success());
        assert_eq!(exit.code(), Some(0));
    }

    #[test]
    fn nonzero_exit_is_not_an_error() {
        let exit = SystemRunner.run(&Probe::new("sh", ["-c", "exit 3"])).unwrap();
        assert!(!exit.success());
        assert_eq!(exit.code(), Some(3));
    }

    #[test]
    fn find_without_matches_still_runs() {
        let dir = std::env::temp_dir().to_string_lossy().into_owned();
        let probe = Probe::new(
            "find",
            [dir.as_str(), "-maxdepth", "0", "-name", "no-such-entry-7f3a"],
        );
        assert!(SystemRunner.run(&probe).is_ok());
    }

    #[test]
    fn missing_binary_is_launch_error() {
        let probe = Probe::new("startup-probe-no-such-binary", ["/"]);
        match SystemRunner.run(&probe) {
            Err(AppError::Launch { command, source }) => {
                assert_eq!(command, "startup-probe-no-such-binary /");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected launch error, got {other:?}"),
        }
    }

    #[test]
    fn exit_code_accessors() {
        assert!(ProbeExit::from_code(0).success());
        assert!(!ProbeExit::from_code(1).success());
        assert!(!ProbeExit::terminated().success());
        assert_eq!(ProbeExit::terminated().code(), None);
    }
}
