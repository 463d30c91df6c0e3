//! Scaffold Use Case
//!
//! Orchestrates the scaffolding flow:
//! 1. Validate the target names
//! 2. Resolve the destination root under the workspace
//! 3. Deploy the scaffold (overwrite gate, `build/`, plain assets)
//! 4. Render every template asset, in store order
//! 5. Run the marker-gated post-deploy actions
//!
//! Every step is fatal on failure. Nothing is rolled back: re-running is safe
//! because each step is idempotent apart from the protected entry point.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::entities::{
    is_protected, output_name, relative_path, AssetKind, DOCKERFILE_ASSET, PROTECTED_OUTPUT,
};
use crate::domain::ports::{
    AssetStore, CommandRunner, FileSystem, OverwriteConfirmer, PostDeployAction, ScaffoldEvent,
    ScaffoldEventSink, TemplateEngine,
};
use crate::domain::services::{destination_root, resolve_workspace, validate_names};
use crate::domain::value_objects::Target;
use crate::error::{ScaffoldError, ScaffoldResult};

use super::options::ScaffoldOptions;
use super::result::ScaffoldReport;

/// Scaffold use case - orchestrates the scaffolding pipeline
///
/// Parameterized by its ports so tests can swap in fakes.
pub struct ScaffoldUseCase<AS, FS, TE, CR>
where
    AS: AssetStore,
    FS: FileSystem,
    TE: TemplateEngine,
    CR: CommandRunner,
{
    assets: AS,
    file_system: FS,
    engine: TE,
    pub(super) runner: CR,
}

impl<AS, FS, TE, CR> ScaffoldUseCase<AS, FS, TE, CR>
where
    AS: AssetStore,
    FS: FileSystem,
    TE: TemplateEngine,
    CR: CommandRunner,
{
    pub fn new(assets: AS, file_system: FS, engine: TE, runner: CR) -> Self {
        Self {
            assets,
            file_system,
            engine,
            runner,
        }
    }

    /// Run the whole pipeline.
    pub fn execute(
        &self,
        options: &ScaffoldOptions,
        confirmer: &dyn OverwriteConfirmer,
        events: &dyn ScaffoldEventSink,
    ) -> ScaffoldResult<ScaffoldReport> {
        let target = &options.target;
        validate_names(target)?;

        let workspace = resolve_workspace(options.workspace.as_deref(), &self.file_system)?;
        info!(workspace = %workspace.display(), "workspace resolved");
        events.on_event(ScaffoldEvent::WorkspaceResolved {
            path: workspace.clone(),
        });

        let root = destination_root(&workspace, target);
        let mut report = ScaffoldReport::new(&root);

        self.deploy_scaffold(&root, confirmer, events, &mut report)?;

        for name in self.assets.names()? {
            if AssetKind::of(&name) == AssetKind::Template {
                self.deploy_template(&root, &name, target, events, &mut report)?;
            }
        }

        self.initialize(&root, options, events, &mut report)?;

        info!(
            root = %root.display(),
            written = report.written.len(),
            skipped = report.skipped.len(),
            "scaffold complete"
        );
        events.on_event(ScaffoldEvent::Completed { root });
        Ok(report)
    }

    /// Create the destination tree and copy the plain assets.
    ///
    /// An existing root is only entered after the confirmer agrees.
    pub fn deploy_scaffold(
        &self,
        root: &Path,
        confirmer: &dyn OverwriteConfirmer,
        events: &dyn ScaffoldEventSink,
        report: &mut ScaffoldReport,
    ) -> ScaffoldResult<()> {
        let exists = self
            .file_system
            .probe(root)
            .map_err(|e| ScaffoldError::io(root, e))?;

        if exists {
            debug!(root = %root.display(), "destination exists, asking to overwrite");
            if !confirmer.confirm_overwrite(root) {
                return Err(ScaffoldError::AlreadyExists {
                    path: root.to_path_buf(),
                });
            }
        }

        events.on_event(ScaffoldEvent::Boilerplating {
            root: root.to_path_buf(),
        });

        let build_dir = root.join("build");
        self.file_system
            .create_dir_all(&build_dir)
            .map_err(|e| ScaffoldError::io(&build_dir, e))?;

        let dockerfile = self.assets.fetch(DOCKERFILE_ASSET)?;
        let path = self.write_output(root, DOCKERFILE_ASSET, &dockerfile)?;
        events.on_event(ScaffoldEvent::AssetCopied { path: path.clone() });
        report.written.push(path);

        for name in self.assets.names()? {
            if name == DOCKERFILE_ASSET || AssetKind::of(&name) != AssetKind::Plain {
                continue;
            }
            if self.keep_entry_point(root, &name, events, report)? {
                continue;
            }
            let content = self.assets.fetch(&name)?;
            let path = self.write_output(root, &name, &content)?;
            events.on_event(ScaffoldEvent::AssetCopied { path: path.clone() });
            report.written.push(path);
        }

        Ok(())
    }

    /// Render one template asset to `root/<name without .template>`.
    ///
    /// A template rendering onto `main.go` is skipped without reading it when
    /// that file already exists.
    pub fn deploy_template(
        &self,
        root: &Path,
        name: &str,
        target: &Target,
        events: &dyn ScaffoldEventSink,
        report: &mut ScaffoldReport,
    ) -> ScaffoldResult<()> {
        if AssetKind::of(name) != AssetKind::Template {
            return Err(ScaffoldError::NotATemplate {
                name: name.to_string(),
            });
        }

        let output = output_name(name);
        if self.keep_entry_point(root, name, events, report)? {
            return Ok(());
        }

        let source = self.assets.fetch(name)?;
        let source = std::str::from_utf8(&source).map_err(|e| ScaffoldError::TemplateSyntax {
            name: name.to_string(),
            message: format!("template is not valid UTF-8: {}", e),
        })?;

        let rendered = self.engine.render(name, source, target)?;
        let path = self.write_output(root, output, rendered.as_bytes())?;

        events.on_event(ScaffoldEvent::TemplateRendered {
            name: output.to_string(),
            path: path.clone(),
        });
        report.written.push(path);
        Ok(())
    }

    /// Run `git init` and `make godep` (or their configured replacements),
    /// each only if its marker is missing.
    pub fn initialize(
        &self,
        root: &Path,
        options: &ScaffoldOptions,
        events: &dyn ScaffoldEventSink,
        report: &mut ScaffoldReport,
    ) -> ScaffoldResult<()> {
        for action in [PostDeployAction::VersionControl, PostDeployAction::Dependencies] {
            let marker = action
                .marker()
                .iter()
                .fold(root.to_path_buf(), |path, part| path.join(part));

            let present = self
                .file_system
                .probe(&marker)
                .map_err(|e| ScaffoldError::io(&marker, e))?;

            if present {
                debug!(marker = %marker.display(), "marker present, skipping {}", action.label());
                events.on_event(ScaffoldEvent::ActionSkipped { action });
                report.actions_skipped.push(action);
                continue;
            }

            let command = options.command_for(action);
            events.on_event(ScaffoldEvent::ActionStarted { action });
            self.runner
                .run(command, root)
                .map_err(|failure| ScaffoldError::ExternalCommandFailed {
                    command: command.to_string(),
                    message: failure.to_string(),
                })?;
            report.actions_run.push(action);
        }

        Ok(())
    }

    /// Report whether `name` targets an existing protected entry point, and
    /// record the skip if so.
    fn keep_entry_point(
        &self,
        root: &Path,
        name: &str,
        events: &dyn ScaffoldEventSink,
        report: &mut ScaffoldReport,
    ) -> ScaffoldResult<bool> {
        if !is_protected(name) {
            return Ok(false);
        }

        let destination = root.join(PROTECTED_OUTPUT);
        let present = self
            .file_system
            .probe(&destination)
            .map_err(|e| ScaffoldError::io(&destination, e))?;
        if present {
            debug!(asset = name, path = %destination.display(), "keeping existing entry point");
            events.on_event(ScaffoldEvent::EntryPointKept {
                name: PROTECTED_OUTPUT.to_string(),
                path: destination.clone(),
            });
            report.skipped.push(destination);
        }
        Ok(present)
    }

    /// Write `content` at the logical `name` under `root`, creating parents.
    fn write_output(&self, root: &Path, name: &str, content: &[u8]) -> ScaffoldResult<PathBuf> {
        let path = root.join(relative_path(name)?);

        if let Some(parent) = path.parent() {
            self.file_system
                .create_dir_all(parent)
                .map_err(|e| ScaffoldError::io(parent, e))?;
        }

        self.file_system
            .write(&path, content)
            .map_err(|e| ScaffoldError::io(&path, e))?;
        debug!(path = %path.display(), bytes = content.len(), "wrote");
        Ok(path)
    }
}
