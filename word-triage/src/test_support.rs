//! Test-only helpers: a scripted prompter and a temporary workspace seeded
//! with category files.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::types::Classification;
use crate::io::prompter::{Prompter, Termination};
use crate::io::store::CategoryPaths;

/// One queued response of a [`ScriptedPrompter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Answer(Classification),
    Quit,
    /// Fail as if reading the terminal had broken.
    DeviceError,
}

/// Prompter that replays queued responses and records every word asked.
///
/// Once the queue is exhausted every further question terminates.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    steps: VecDeque<ScriptStep>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self {
            steps: steps.into(),
            asked: Vec::new(),
        }
    }

    /// Words asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, word: &str) -> Result<Classification, Termination> {
        self.asked.push(word.to_string());
        match self.steps.pop_front() {
            Some(ScriptStep::Answer(classification)) => Ok(classification),
            Some(ScriptStep::DeviceError) => Err(Termination::Device(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "scripted input closed",
            ))),
            Some(ScriptStep::Quit) | None => Err(Termination::Quit),
        }
    }
}

/// Temporary working directory with `known.txt`, `unknown.txt` and
/// `skip.txt` in place.
pub struct TestWorkspace {
    dir: TempDir,
    pub paths: CategoryPaths,
}

impl TestWorkspace {
    /// Workspace with three empty category files.
    pub fn new() -> Result<Self> {
        Self::with_categories(&[], &[], &[])
    }

    /// Workspace whose category files hold the given words, one per line.
    pub fn with_categories(known: &[&str], unknown: &[&str], skip: &[&str]) -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp workspace")?;
        let paths = CategoryPaths::new(dir.path());
        write_lines(&paths.known, known)?;
        write_lines(&paths.unknown, unknown)?;
        write_lines(&paths.skip, skip)?;
        Ok(Self { dir, paths })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write the input word list verbatim and return its path.
    pub fn write_input(&self, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join("words.txt");
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Raw contents of a category file.
    pub fn read_category(&self, classification: Classification) -> Result<String> {
        let path = self.paths.path(classification);
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
    }

    /// Lines of a category file.
    pub fn category_lines(&self, classification: Classification) -> Result<Vec<String>> {
        Ok(self
            .read_category(classification)?
            .lines()
            .map(str::to_string)
            .collect())
    }
}

fn write_lines(path: &Path, words: &[&str]) -> Result<()> {
    let contents: String = words.iter().map(|word| format!("{word}\n")).collect();
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}
