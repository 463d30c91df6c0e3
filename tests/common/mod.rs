//! Common test utilities for gostrap CLI tests.
//!
//! Provides `TestEnv`: an isolated GOPATH plus a config file whose external
//! commands are shell stubs, so no real git or make is needed.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Config used unless a test writes its own: stubbed init commands that only
/// create the markers.
pub const STUB_CONFIG: &str = r#"[commands]
vcs_init = ["sh", "-c", "mkdir .git"]
deps_init = ["sh", "-c", "mkdir -p Godeps/_workspace"]
"#;

/// Result of running a gostrap CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Isolated environment: a GOPATH and a config file in temp directories
pub struct TestEnv {
    pub gopath: TempDir,
    pub config_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_config(STUB_CONFIG)
    }

    pub fn with_config(config: &str) -> Self {
        let gopath = tempfile::tempdir().expect("Failed to create GOPATH");
        std::fs::create_dir_all(gopath.path().join("src")).expect("Failed to create src");
        let config_dir = tempfile::tempdir().expect("Failed to create config dir");
        std::fs::write(config_dir.path().join("config.toml"), config)
            .expect("Failed to write config");

        Self {
            gopath,
            config_dir,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_gostrap")),
        }
    }

    /// Destination root for `github.com/acme/<project>`
    pub fn root(&self, project: &str) -> PathBuf {
        self.gopath
            .path()
            .join("src")
            .join("github.com")
            .join("acme")
            .join(project)
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().join("config.toml")
    }

    /// Base command: GOPATH and GOSTRAP_CONFIG set, RUST_LOG cleared
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.env("GOPATH", self.gopath.path())
            .env("GOSTRAP_CONFIG", self.config_path())
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run with the given arguments and closed stdin
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_cmd(self.command().args(args))
    }

    /// Run with the given arguments, feeding `input` on stdin
    pub fn run_with_input(&self, args: &[&str], input: impl AsRef<[u8]>) -> TestResult {
        let mut cmd = self.command();
        cmd.args(args);
        run_with_stdin(&mut cmd, input)
    }

    pub fn run_cmd(&self, cmd: &mut Command) -> TestResult {
        TestResult::from_output(cmd.output().expect("Failed to execute gostrap"))
    }

    /// Write a file under the destination root for `project`
    pub fn write_root_file(&self, project: &str, relative: &str, content: &str) {
        let path = self.root(project).join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }
}

/// Flags naming `github.com/acme/<project>`
pub fn target_args(project: &str) -> Vec<&str> {
    vec![
        "--repository",
        "github.com",
        "--namespace",
        "acme",
        "--project",
        project,
    ]
}

pub fn run_with_stdin(cmd: &mut Command, input: impl AsRef<[u8]>) -> TestResult {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn gostrap");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_ref())
        .expect("Failed to write stdin");

    TestResult::from_output(child.wait_with_output().expect("Failed to wait for gostrap"))
}

/// Every regular file under `dir`, relative, with its bytes
pub fn snapshot_tree(dir: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    fn walk(base: &Path, dir: &Path, out: &mut Vec<(PathBuf, Vec<u8>)>) {
        for entry in std::fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(base, &path, out);
            } else {
                let rel = path.strip_prefix(base).unwrap().to_path_buf();
                out.push((rel, std::fs::read(&path).unwrap()));
            }
        }
    }

    let mut out = Vec::new();
    if dir.exists() {
        walk(dir, dir, &mut out);
    }
    out.sort();
    out
}
