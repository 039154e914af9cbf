//! Triage configuration stored in `triage.toml`.

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "triage.toml";

/// Triage configuration (TOML).
///
/// Every field is optional; a missing file or missing keys fall back to the
/// defaults below.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TriageConfig {
    pub files: FilesConfig,
}

/// Names of the three category files, relative to the working directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilesConfig {
    pub known: String,
    pub unknown: String,
    pub skip: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            known: "known.txt".to_string(),
            unknown: "unknown.txt".to_string(),
            skip: "skip.txt".to_string(),
        }
    }
}

impl TriageConfig {
    pub fn validate(&self) -> Result<()> {
        let files = [
            ("files.known", &self.files.known),
            ("files.unknown", &self.files.unknown),
            ("files.skip", &self.files.skip),
        ];
        for (key, value) in files {
            if value.trim().is_empty() {
                return Err(anyhow!("{key} must be a non-empty path"));
            }
        }
        let distinct: HashSet<PathBuf> = files
            .iter()
            .map(|(_, value)| normalized_name(value))
            .collect();
        if distinct.len() != files.len() {
            return Err(anyhow!("files.known, files.unknown and files.skip must differ"));
        }
        Ok(())
    }
}

/// Lexical form of a file name used to spot aliases such as `./known.txt`.
///
/// `.` components and repeated separators are dropped; `..` is kept as is.
fn normalized_name(name: &str) -> PathBuf {
    Path::new(name)
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `TriageConfig::default()`.
pub fn load_config(path: &Path) -> Result<TriageConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(TriageConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: TriageConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    debug!(path = %path.display(), ?cfg, "config loaded");
    Ok(cfg)
}

/// Resolve the config for a run.
///
/// An explicitly requested file must exist; the implicit default file is
/// optional.
pub fn resolve_config(explicit: Option<&Path>, workdir: &Path) -> Result<TriageConfig> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("config file {} not found", path.display());
            }
            load_config(path)
        }
        None => load_config(&workdir.join(DEFAULT_CONFIG_FILE)),
    }
}
