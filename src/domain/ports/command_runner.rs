//! CommandRunner port - launching external setup tools
//!
//! The pipeline only cares about the call boundary: which program, which
//! arguments, which working directory, and whether it succeeded.

use std::fmt;
use std::path::Path;
use std::process::ExitStatus;

/// A program plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
}

impl ExternalCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from an argv-style list; `None` if the list is empty
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        if program.trim().is_empty() {
            return None;
        }
        Some(Self::new(program.clone(), args.iter().cloned()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Why an external command did not succeed
#[derive(Debug)]
pub enum CommandFailure {
    /// The process could not be started
    Launch(std::io::Error),
    /// The process ran and exited unsuccessfully
    Exit(ExitStatus),
}

impl fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandFailure::Launch(err) => write!(f, "{}", err),
            CommandFailure::Exit(status) => write!(f, "{}", status),
        }
    }
}

impl std::error::Error for CommandFailure {}

/// Runs external commands to completion
pub trait CommandRunner {
    /// Run `command` in `cwd`, blocking until it exits.
    fn run(&self, command: &ExternalCommand, cwd: &Path) -> Result<(), CommandFailure>;
}
