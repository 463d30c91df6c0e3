//! Command Runner
//!
//! Glue between the parsed CLI and the scaffold use case: loads config,
//! collects the target, picks the confirmer, and runs the pipeline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::application::{ScaffoldOptions, ScaffoldReport};
use crate::config::{Config, ConfigWarning};
use crate::domain::ports::{AssumeYes, OverwriteConfirmer};
use crate::domain::services::WORKSPACE_VAR;
use crate::infrastructure::LineConfirmer;

use super::cli::Cli;
use super::factory::{create_scaffold_use_case, AssetSource};
use super::output::ConsoleEventSink;
use super::prompts::collect_target;

fn log_config_warning(warning: &ConfigWarning) {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => warn!(
            "unknown config key '{}' at {} (did you mean '{}'?)",
            warning.key, location, suggestion
        ),
        None => warn!("unknown config key '{}' at {}", warning.key, location),
    }
}

/// Build the run options from the CLI, the config, and the environment.
pub fn build_options(cli: &Cli, config: &Config) -> Result<ScaffoldOptions> {
    let target = collect_target(|field| cli.field(field), |field| config.defaults.get(field))
        .context("failed to read project coordinates")?;

    let mut options = ScaffoldOptions::new(target)
        .with_workspace(std::env::var_os(WORKSPACE_VAR).map(PathBuf::from));
    if let Some(command) = config.vcs_command() {
        options = options.with_vcs_command(command);
    }
    if let Some(command) = config.deps_command() {
        options = options.with_deps_command(command);
    }
    Ok(options)
}

/// Run one scaffold invocation end to end.
pub fn run(cli: Cli) -> Result<ScaffoldReport> {
    let (config, warnings) = Config::load_or_default()?;
    for warning in &warnings {
        log_config_warning(warning);
    }

    let options = build_options(&cli, &config)?;
    debug!(target_path = %options.target.import_path(), "collected target");

    let confirmer: Box<dyn OverwriteConfirmer> = if cli.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(LineConfirmer::stdio())
    };

    let use_case = create_scaffold_use_case(AssetSource::from_option(cli.assets), cli.verbose > 0);
    let report = use_case.execute(&options, confirmer.as_ref(), &ConsoleEventSink::stdout())?;
    Ok(report)
}
