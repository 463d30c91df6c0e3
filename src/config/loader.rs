//! Configuration loading

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ScaffoldError, ScaffoldResult};

use super::types::Config;

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "GOSTRAP_CONFIG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Where the config file is expected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    /// Named by `$GOSTRAP_CONFIG`; a missing file is then an error
    pub explicit: bool,
}

/// Pick the config file from an override value or the user config dir.
pub fn locate(env_override: Option<OsString>, config_dir: Option<PathBuf>) -> Option<ConfigLocation> {
    if let Some(value) = env_override.filter(|v| !v.is_empty()) {
        return Some(ConfigLocation {
            path: PathBuf::from(value),
            explicit: true,
        });
    }

    config_dir.map(|dir| ConfigLocation {
        path: dir.join("gostrap").join("config.toml"),
        explicit: false,
    })
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ScaffoldResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ScaffoldError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    validate_commands(&config, path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from the located file, or defaults when there is none
pub fn load_from(location: Option<ConfigLocation>) -> ScaffoldResult<(Config, Vec<ConfigWarning>)> {
    let Some(location) = location else {
        return Ok((Config::default(), Vec::new()));
    };

    match load_with_warnings(&location.path) {
        Err(ScaffoldError::Io { source, .. })
            if source.kind() == io::ErrorKind::NotFound && !location.explicit =>
        {
            debug!(path = %location.path.display(), "no config file, using defaults");
            Ok((Config::default(), Vec::new()))
        }
        Err(ScaffoldError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            Err(ScaffoldError::Config {
                file: location.path,
                message: format!("file named by ${} does not exist", CONFIG_ENV_VAR),
            })
        }
        Ok(loaded) => {
            debug!(path = %location.path.display(), "loaded config");
            Ok(loaded)
        }
        Err(e) => Err(e),
    }
}

/// Load from `$GOSTRAP_CONFIG`, then `<config_dir>/gostrap/config.toml`
pub fn load_or_default() -> ScaffoldResult<(Config, Vec<ConfigWarning>)> {
    load_from(locate(std::env::var_os(CONFIG_ENV_VAR), dirs::config_dir()))
}

fn validate_commands(config: &Config, path: &Path) -> ScaffoldResult<()> {
    if config.vcs_command().is_none() {
        return Err(ScaffoldError::Config {
            file: path.to_path_buf(),
            message: "commands.vcs_init must name a program".to_string(),
        });
    }
    if config.deps_command().is_none() {
        return Err(ScaffoldError::Config {
            file: path.to_path_buf(),
            message: "commands.deps_init must name a program".to_string(),
        });
    }
    Ok(())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "defaults",
        "repository",
        "namespace",
        "project",
        "commands",
        "vcs_init",
        "deps_init",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
