//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - There are no subcommands; one invocation scaffolds one project
//! - Any coordinate not given as a flag is prompted for

use std::path::PathBuf;

use clap::Parser;

use crate::domain::value_objects::TargetField;

/// gostrap - bootstrap a Go service under $GOPATH
#[derive(Parser, Debug)]
#[command(name = "gostrap")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Projects are created at $GOPATH/src/<repository>/<namespace>/<project>.\nGOPATH must be set. GOSTRAP_CONFIG overrides the config file location."
)]
pub struct Cli {
    /// Git repository host (e.g. github.com)
    #[arg(long, value_name = "NAME")]
    pub repository: Option<String>,

    /// Namespace in the repository (e.g. zulily)
    #[arg(long, value_name = "NAME")]
    pub namespace: Option<String>,

    /// Project name (e.g. fizzbuzz)
    #[arg(long, value_name = "NAME")]
    pub project: Option<String>,

    /// Verbosity level (-v, -vv); -v also shows git/make output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Overwrite an existing project directory without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Read assets from a directory instead of the built-in set
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,
}

impl Cli {
    /// Value passed on the command line for `field`, if any
    pub fn field(&self, field: TargetField) -> Option<&str> {
        match field {
            TargetField::Repository => self.repository.as_deref(),
            TargetField::Namespace => self.namespace.as_deref(),
            TargetField::Project => self.project.as_deref(),
        }
    }
}
