//! Load and save the three category files as a [`TriageState`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::state::TriageState;
use crate::core::types::Classification;
use crate::io::config::FilesConfig;
use crate::io::word_list::{load_words, save_words};

/// Locations of the known, unknown and skip files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPaths {
    pub known: PathBuf,
    pub unknown: PathBuf,
    pub skip: PathBuf,
}

impl CategoryPaths {
    /// Default file names under `root`.
    pub fn new(root: &Path) -> Self {
        Self::from_config(root, &FilesConfig::default())
    }

    pub fn from_config(root: &Path, files: &FilesConfig) -> Self {
        Self {
            known: root.join(&files.known),
            unknown: root.join(&files.unknown),
            skip: root.join(&files.skip),
        }
    }

    pub fn path(&self, classification: Classification) -> &Path {
        match classification {
            Classification::Known => &self.known,
            Classification::Unknown => &self.unknown,
            Classification::Skip => &self.skip,
        }
    }
}

/// Load all three category files. Every file must exist, even if empty.
pub fn load_state(paths: &CategoryPaths) -> Result<TriageState> {
    let known = load_category(paths, Classification::Known)?;
    let unknown = load_category(paths, Classification::Unknown)?;
    let skip = load_category(paths, Classification::Skip)?;
    Ok(TriageState::new(known, unknown, skip))
}

/// Overwrite the three category files from `state`.
///
/// Known and skip are sorted in place first. Files are written in the order
/// known, unknown, skip; the first failure stops the save and files written
/// before it keep their new contents.
pub fn save_state(paths: &CategoryPaths, state: &mut TriageState) -> Result<()> {
    state.sort_for_save();
    for classification in Classification::ALL {
        let path = paths.path(classification);
        save_words(path, state.words(classification))
            .with_context(|| format!("save {classification} words"))?;
    }
    debug!(
        known = state.words(Classification::Known).len(),
        unknown = state.words(Classification::Unknown).len(),
        skip = state.words(Classification::Skip).len(),
        "triage state saved"
    );
    Ok(())
}

fn load_category(paths: &CategoryPaths, classification: Classification) -> Result<Vec<String>> {
    load_words(paths.path(classification))
        .with_context(|| format!("load {classification} words"))
}
