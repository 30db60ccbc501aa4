//! Command-line interface wiring for event-extract.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::info;

use crate::{
    config::Settings,
    data::{articles, Article, StopwordSet},
    nlp::{ner::LexiconRecognizer, segment::LexiconSegmenter},
    report::ReportFormat,
    topics::GibbsSampler,
};

pub mod candidates;
pub mod extract;
pub mod topics;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Topic-guided event sentence extraction", long_about = None)]
pub struct Cli {
    /// Log pipeline details at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Extract(args) => extract::run(args, settings),
            Commands::Topics(args) => topics::run(args, settings),
            Commands::Candidates(args) => candidates::run(args, settings),
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract up to three event sentences per article.
    Extract(extract::Args),
    /// Show the ranked keywords of the topic paired with each article.
    Topics(topics::Args),
    /// Show the candidate event sentences of each article.
    Candidates(candidates::Args),
}

/// Input overrides shared by every sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct InputArgs {
    /// Directory of article files (overrides ARTICLES_DIR).
    #[arg(long)]
    pub articles: Option<PathBuf>,
    /// Directory of stopword lists (overrides STOPWORDS_DIR).
    #[arg(long)]
    pub stopwords: Option<PathBuf>,
    /// User dictionary for the segmenter (overrides LEXICON_PATH).
    #[arg(long)]
    pub lexicon: Option<PathBuf>,
    /// Seed the topic sampler for reproducible runs (overrides LDA_SEED).
    #[arg(long)]
    pub seed: Option<u64>,
    /// Report format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

impl InputArgs {
    /// Fold command-line overrides into the loaded settings.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(dir) = &self.articles {
            settings.articles_dir = dir.clone();
        }
        if let Some(dir) = &self.stopwords {
            settings.stopwords_dir = dir.clone();
        }
        if let Some(path) = &self.lexicon {
            settings.lexicon_path = Some(path.clone());
        }
        if self.seed.is_some() {
            settings.lda.seed = self.seed;
        }
        settings
    }
}

/// Default collaborators, constructed once per run.
pub struct Engines {
    pub segmenter: LexiconSegmenter,
    pub recognizer: LexiconRecognizer,
    pub sampler: GibbsSampler,
}

impl Engines {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut segmenter = LexiconSegmenter::new();
        if let Some(path) = &settings.lexicon_path {
            segmenter = segmenter
                .with_dictionary(path)
                .with_context(|| format!("loading lexicon {}", path.display()))?;
        }
        info!(lexicon = segmenter.len(), "segmenter ready");
        Ok(Self {
            segmenter,
            recognizer: LexiconRecognizer::new(),
            sampler: GibbsSampler::new(settings.lda.clone()).context("configuring sampler")?,
        })
    }
}

pub(crate) fn load_articles(settings: &Settings) -> Result<Vec<Article>> {
    articles::load_articles(&settings.articles_dir)
        .with_context(|| format!("reading articles from {}", settings.articles_dir.display()))
}

pub(crate) fn load_stopwords(settings: &Settings) -> Result<StopwordSet> {
    StopwordSet::load_dir(&settings.stopwords_dir)
        .with_context(|| format!("reading stopwords from {}", settings.stopwords_dir.display()))
}
