//! System Command Runner
//!
//! Spawns external tools with `std::process::Command` and waits for them.
//! Output is discarded unless verbose, in which case it goes straight to the
//! operator's terminal.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{CommandFailure, CommandRunner, ExternalCommand};

/// Runs commands as child processes of gostrap
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner {
    verbose: bool,
}

impl SystemCommandRunner {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn output(&self) -> Stdio {
        if self.verbose {
            Stdio::inherit()
        } else {
            Stdio::null()
        }
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &ExternalCommand, cwd: &Path) -> Result<(), CommandFailure> {
        tracing::debug!(command = %command, cwd = %cwd.display(), "spawning");

        let status = Command::new(command.program())
            .args(command.args())
            .current_dir(cwd)
            .stdout(self.output())
            .stderr(self.output())
            .status()
            .map_err(CommandFailure::Launch)?;

        if !status.success() {
            return Err(CommandFailure::Exit(status));
        }

        Ok(())
    }
}
