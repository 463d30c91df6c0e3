//! Output Rendering
//!
//! Turns scaffold events into the operator-facing progress lines.

use std::cell::RefCell;
use std::io::{self, Stdout, Write};

use crate::domain::ports::{ScaffoldEvent, ScaffoldEventSink};
use crate::domain::services::WORKSPACE_VAR;

/// Format one event as a progress line, or `None` if it is silent
pub fn render_event(event: &ScaffoldEvent) -> Option<String> {
    match event {
        ScaffoldEvent::WorkspaceResolved { path } => {
            Some(format!("{} is: {}", WORKSPACE_VAR, path.display()))
        }
        ScaffoldEvent::Boilerplating { root } => {
            Some(format!("Boilerplating the project at: {}", root.display()))
        }
        ScaffoldEvent::TemplateRendered { name, .. } => Some(format!("Creating new: {}", name)),
        ScaffoldEvent::EntryPointKept { name, .. } => {
            Some(format!("Keeping existing: {}", name))
        }
        ScaffoldEvent::ActionStarted { action } => {
            Some(format!("Initializing {}", action.label()))
        }
        ScaffoldEvent::Completed { .. } => Some("Done".to_string()),
        ScaffoldEvent::AssetCopied { .. } | ScaffoldEvent::ActionSkipped { .. } => None,
    }
}

/// Event sink printing progress lines to a writer (stdout by default)
pub struct ConsoleEventSink<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> ConsoleEventSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl ConsoleEventSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ScaffoldEventSink for ConsoleEventSink<W> {
    fn on_event(&self, event: ScaffoldEvent) {
        if let Some(line) = render_event(&event) {
            let mut out = self.out.borrow_mut();
            // progress output is best effort
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        }
    }
}
