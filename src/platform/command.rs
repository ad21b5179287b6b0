//! External process invocation.
//!
//! Vendor strategies never spawn processes themselves; they go through a
//! [`CommandRunner`] so they can be driven by scripted output in tests.

use crate::error::{GpuProbeError, Result};
use std::process::Command;

/// Captured result of one external tool invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Process exited with status 0
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Successful invocation with the given stdout
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed invocation (non-zero exit) with the given stderr
    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// stdout followed by stderr, like a shell `2>&1`
    pub fn combined(&self) -> String {
        let mut combined = String::with_capacity(self.stdout.len() + self.stderr.len());
        combined.push_str(&self.stdout);
        combined.push_str(&self.stderr);
        combined
    }
}

/// Runs an external program and captures its output
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// Returns `Err` only when the process could not be started at all
    /// (missing executable, I/O error). A non-zero exit is reported through
    /// [`CommandOutput::success`].
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

/// [`CommandRunner`] backed by `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        log::debug!("Running {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| GpuProbeError::spawn(program, e))?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Run a tool and keep its output only if it started and exited cleanly.
///
/// Every failure is logged at debug level and collapsed into `None`.
pub fn run_successful(
    runner: &dyn CommandRunner,
    program: &str,
    args: &[&str],
) -> Option<CommandOutput> {
    match runner.run(program, args) {
        Ok(output) if output.success => Some(output),
        Ok(output) => {
            log::debug!(
                "{} exited with failure: {}",
                program,
                output.stderr.trim()
            );
            None
        }
        Err(e) => {
            log::debug!("{}", e);
            None
        }
    }
}
