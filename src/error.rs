//! Error types for the extraction pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error raised by a tokenizer, recognizer or trainer.
pub type EngineSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for pipeline operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// An article, stopword or dictionary source could not be read.
    #[error("failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Every token of every document was filtered away.
    #[error("corpus vocabulary is empty after cleaning {documents} documents")]
    EmptyVocabulary { documents: usize },

    /// A stage produced a list whose size differs from its input batch.
    #[error("alignment failure at {stage}: expected {expected} entries, got {actual}")]
    Alignment {
        stage: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An injected collaborator failed.
    #[error("{engine} failed: {source}")]
    Engine {
        engine: &'static str,
        #[source]
        source: EngineSource,
    },

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create a load error for `path`.
    pub fn load(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Load {
            path: path.into(),
            source,
        }
    }

    /// Wrap a collaborator failure with the collaborator's name.
    pub fn engine(engine: &'static str, source: impl Into<EngineSource>) -> Self {
        Error::Engine {
            engine,
            source: source.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }

    /// Check a batch-aligned list size, logging both sizes on mismatch.
    pub fn check_alignment(stage: &'static str, expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            return Ok(());
        }
        tracing::error!(stage, expected, actual, "batch alignment violated");
        Err(Error::Alignment {
            stage,
            expected,
            actual,
        })
    }
}
