//! Runtime configuration for event-extract.

use std::{env, path::PathBuf, str::FromStr};

use anyhow::{Context, Result};

use crate::{
    events::{
        candidates::DEFAULT_MIN_SENTENCE_CHARS,
        selector::{SelectorOptions, DEFAULT_MAX_EVENTS},
        PipelineOptions,
    },
    report::DEFAULT_LEAD_CHARS,
    topics::{explain::DEFAULT_TOP_WORDS, GibbsConfig},
};

/// Application configuration resolved from `.env`, the environment and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory of article files, one article per file.
    pub articles_dir: PathBuf,
    /// Directory of stopword lists, one word per line.
    pub stopwords_dir: PathBuf,
    /// Optional user dictionary extending the segmenter lexicon.
    pub lexicon_path: Option<PathBuf>,
    /// Keywords kept per topic.
    pub topic_words: usize,
    /// Cap on events per article.
    pub max_events: usize,
    /// Minimum candidate sentence length in characters.
    pub min_sentence_chars: usize,
    /// Characters of each article echoed in the report.
    pub lead_chars: usize,
    /// Topic sampler hyper-parameters and optional seed.
    pub lda: GibbsConfig,
}

impl Default for Settings {
    fn default() -> Self {
        let data_dir = PathBuf::from("./data");
        Self {
            articles_dir: data_dir.join("articles"),
            stopwords_dir: data_dir.join("stopwords"),
            lexicon_path: None,
            topic_words: DEFAULT_TOP_WORDS,
            max_events: DEFAULT_MAX_EVENTS,
            min_sentence_chars: DEFAULT_MIN_SENTENCE_CHARS,
            lead_chars: DEFAULT_LEAD_CHARS,
            lda: GibbsConfig::default(),
        }
    }
}

impl Settings {
    /// Load configuration from `.env` and the environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        let data_dir = env::var("DATA_DIR").map(PathBuf::from).ok();
        let articles_dir = env::var("ARTICLES_DIR")
            .map(PathBuf::from)
            .ok()
            .or_else(|| data_dir.as_ref().map(|d| d.join("articles")))
            .unwrap_or(defaults.articles_dir);
        let stopwords_dir = env::var("STOPWORDS_DIR")
            .map(PathBuf::from)
            .ok()
            .or_else(|| data_dir.as_ref().map(|d| d.join("stopwords")))
            .unwrap_or(defaults.stopwords_dir);
        let lexicon_path = env::var("LEXICON_PATH").ok().map(PathBuf::from);

        let lda = GibbsConfig {
            alpha: parse_var("LDA_ALPHA")?.unwrap_or(defaults.lda.alpha),
            beta: parse_var("LDA_BETA")?.unwrap_or(defaults.lda.beta),
            iterations: parse_var("LDA_ITERATIONS")?.unwrap_or(defaults.lda.iterations),
            burn_in: parse_var("LDA_BURN_IN")?.unwrap_or(defaults.lda.burn_in),
            sample_lag: parse_var("LDA_SAMPLE_LAG")?.unwrap_or(defaults.lda.sample_lag),
            seed: parse_var("LDA_SEED")?,
        };

        Ok(Self {
            articles_dir,
            stopwords_dir,
            lexicon_path,
            topic_words: parse_var("TOPIC_WORDS")?.unwrap_or(defaults.topic_words),
            max_events: parse_var("MAX_EVENTS")?.unwrap_or(defaults.max_events),
            min_sentence_chars: parse_var("MIN_SENTENCE_CHARS")?
                .unwrap_or(defaults.min_sentence_chars),
            lead_chars: parse_var("LEAD_CHARS")?.unwrap_or(defaults.lead_chars),
            lda,
        })
    }

    /// Pipeline tunables derived from these settings.
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            top_words: self.topic_words,
            min_sentence_chars: self.min_sentence_chars,
            selector: SelectorOptions {
                max_events: self.max_events,
            },
        }
    }
}

/// Parse an optional environment variable, failing loudly on malformed values.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("parsing {name}={raw}")),
        _ => Ok(None),
    }
}
