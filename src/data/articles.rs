//! Article loading. Batch order is the file-name order of the source directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Raw text of one document. Its identity is its position in the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub text: String,
    pub source: Option<PathBuf>,
}

impl Article {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: None,
        }
    }

    /// First `max_chars` characters of the article, used as the report lead.
    pub fn lead(&self, max_chars: usize) -> String {
        self.text.chars().take(max_chars).collect()
    }
}

/// Drop lines whose trimmed length is below two characters and terminate
/// every kept line with `\n`.
pub fn compact_lines(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    for line in raw.lines() {
        if line.trim().chars().count() < 2 {
            continue;
        }
        text.push_str(line);
        text.push('\n');
    }
    text
}

/// Read one article file.
pub fn load_article(path: &Path) -> Result<Article> {
    let raw = fs::read_to_string(path).map_err(|err| Error::load(path, err))?;
    Ok(Article {
        text: compact_lines(&raw),
        source: Some(path.to_path_buf()),
    })
}

/// Load every regular file directly inside `dir` as an article.
pub fn load_articles(dir: &Path) -> Result<Vec<Article>> {
    let mut articles = Vec::new();
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
        debug!(path = %entry.path().display(), "reading article");
        articles.push(load_article(entry.path())?);
    }
    info!(dir = %dir.display(), count = articles.len(), "loaded articles");
    Ok(articles)
}
