//! Safe subprocess execution for systemctl.
//!
//! Provides a builder for systemctl invocations with:
//! - No shell interpretation (direct exec)
//! - Captured stdout/stderr
//! - Subprocess termination when the caller's future is dropped
//!
//! Cancellation contract: the spawned child is configured with
//! `kill_on_drop`, so wrapping a call in `tokio::time::timeout` (or
//! racing it in a `select!`) and dropping the future terminates the
//! external process. The resulting `Elapsed` converts into
//! [`crate::error::Error::Timeout`].

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::Result;
use crate::options::Options;

/// Name of the external service-manager control binary.
pub const SYSTEMCTL_BIN: &str = "systemctl";

/// Captured result of a systemctl execution.
#[derive(Debug, Clone)]
pub struct ExecOutput {
    /// The exit code, if the process exited normally.
    pub code: Option<i32>,
    /// Captured stdout as a lossy UTF-8 string.
    pub stdout: String,
    /// Captured stderr as a lossy UTF-8 string.
    pub stderr: String,
}

impl ExecOutput {
    /// Whether the command exited with code 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Combined diagnostic text, stderr first.
    ///
    /// systemctl writes its failure diagnostics to stderr but a few
    /// subcommands report state words on stdout, so classification
    /// inspects both.
    pub fn combined(&self) -> String {
        let mut text = self.stderr.clone();
        text.push_str(&self.stdout);
        text
    }
}

/// Builder for one systemctl invocation.
///
/// Every invocation carries an explicit `--system` or `--user` scope flag
/// taken from [`Options`], followed by the subcommand, then any unit or
/// extra arguments.
pub struct SystemctlCommand {
    program: String,
    args: Vec<String>,
}

impl SystemctlCommand {
    /// Create a builder for the given subcommand in the scope selected
    /// by `options`.
    pub fn new(subcommand: &str, options: Options) -> Self {
        let scope = if options.user_mode { "--user" } else { "--system" };
        Self {
            program: SYSTEMCTL_BIN.to_string(),
            args: vec![scope.to_string(), subcommand.to_string()],
        }
    }

    /// Append the unit name argument. Passed through verbatim; validity
    /// is decided entirely by the service manager.
    pub fn unit(mut self, unit: &str) -> Self {
        self.args.push(unit.to_string());
        self
    }

    /// Append a single extra argument.
    pub fn arg(mut self, arg: &str) -> Self {
        self.args.push(arg.to_string());
        self
    }

    /// Builder running an arbitrary binary with no implicit scope flag.
    /// Test hook for exercising the spawn/capture/kill paths.
    #[cfg(test)]
    pub(crate) fn bare(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
        }
    }

    /// Arguments as they will be passed to the binary.
    pub fn rendered_args(&self) -> &[String] {
        &self.args
    }

    /// Spawn the process and wait for it to exit, capturing output.
    ///
    /// If the returned future is dropped before the process exits, the
    /// process is killed.
    pub async fn run(self) -> Result<ExecOutput> {
        debug!(
            program = %self.program,
            args = ?self.args,
            "executing systemctl"
        );

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await?;

        let result = ExecOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        if result.success() {
            debug!(code = ?result.code, "systemctl completed");
        } else {
            warn!(
                code = ?result.code,
                stderr = %result.stderr.trim(),
                "systemctl exited nonzero"
            );
        }

        Ok(result)
    }
}
