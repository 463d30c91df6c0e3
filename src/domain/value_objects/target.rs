//! Target value object - where a project is scaffolded and what it is called

use serde::Serialize;

/// One of the three coordinates of a [`Target`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetField {
    /// Source control host (e.g. github.com)
    Repository,
    /// Organization or group within the repository (e.g. acme)
    Namespace,
    /// Binary or package name (e.g. widget)
    Project,
}

impl TargetField {
    /// All fields in validation order
    pub const ALL: [TargetField; 3] = [
        TargetField::Repository,
        TargetField::Namespace,
        TargetField::Project,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetField::Repository => "repository",
            TargetField::Namespace => "namespace",
            TargetField::Project => "project",
        }
    }
}

impl std::fmt::Display for TargetField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The build target: repository host, namespace, and project name.
///
/// Constructed once from flags or prompts and never mutated. Serializes with
/// lowercase keys, which are the variable names templates see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    repository: String,
    namespace: String,
    project: String,
}

impl Target {
    pub fn new(
        repository: impl Into<String>,
        namespace: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        Self {
            repository: repository.into(),
            namespace: namespace.into(),
            project: project.into(),
        }
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    /// Value of a single coordinate
    pub fn get(&self, field: TargetField) -> &str {
        match field {
            TargetField::Repository => &self.repository,
            TargetField::Namespace => &self.namespace,
            TargetField::Project => &self.project,
        }
    }

    /// Go import path (`repository/namespace/project`)
    pub fn import_path(&self) -> String {
        format!("{}/{}/{}", self.repository, self.namespace, self.project)
    }
}
