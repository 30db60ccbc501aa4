//! Stopword set with plain membership semantics.

use std::{collections::HashSet, fs, path::Path};

use tracing::info;
use walkdir::WalkDir;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Load every file in `dir`, one stopword per line. Blank lines are skipped.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut set = Self::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|err| {
                let path = err.path().unwrap_or(dir).to_path_buf();
                Error::load(path, err.into())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let raw = fs::read_to_string(entry.path()).map_err(|err| Error::load(entry.path(), err))?;
            set.extend_from_lines(&raw);
        }
        info!(dir = %dir.display(), count = set.len(), "loaded stopwords");
        Ok(set)
    }

    /// Add one stopword per non-blank line.
    pub fn extend_from_lines(&mut self, raw: &str) {
        for line in raw.lines() {
            if line.trim().is_empty() {
                continue;
            }
            self.words.insert(line.trim_end_matches('\r').to_string());
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
