//! Batch orchestration: cleaning, topic modeling, candidates and selection.

use tracing::{debug, info, instrument, warn};

use super::{
    candidates::{CandidateExtractor, DEFAULT_MIN_SENTENCE_CHARS},
    selector::{EventSelector, SelectorOptions},
};
use crate::{
    data::{Article, StopwordSet},
    error::{Error, Result},
    nlp::{clean::TokenCleaner, EntityRecognizer, Tokenizer},
    topics::{explain::DEFAULT_TOP_WORDS, explain_topics, Corpus, TopicExplanation, TopicTrainer},
};

/// Tunables of one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub top_words: usize,
    pub min_sentence_chars: usize,
    pub selector: SelectorOptions,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            top_words: DEFAULT_TOP_WORDS,
            min_sentence_chars: DEFAULT_MIN_SENTENCE_CHARS,
            selector: SelectorOptions::default(),
        }
    }
}

/// Everything a run produced, index-aligned with the input articles.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub topics: Vec<TopicExplanation>,
    pub candidates: Vec<Vec<String>>,
    pub events: Vec<Vec<String>>,
}

/// Event extraction pipeline over injected collaborators.
pub struct EventPipeline<'a> {
    tokenizer: &'a dyn Tokenizer,
    recognizer: &'a dyn EntityRecognizer,
    trainer: &'a dyn TopicTrainer,
    options: PipelineOptions,
}

impl<'a> EventPipeline<'a> {
    pub fn new(
        tokenizer: &'a dyn Tokenizer,
        recognizer: &'a dyn EntityRecognizer,
        trainer: &'a dyn TopicTrainer,
    ) -> Self {
        Self {
            tokenizer,
            recognizer,
            trainer,
            options: PipelineOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    /// Train one topic per article and explain each into ranked keywords.
    #[instrument(skip_all, fields(articles = articles.len()))]
    pub fn explain(
        &self,
        articles: &[Article],
        stopwords: &StopwordSet,
    ) -> Result<Vec<TopicExplanation>> {
        let cleaner = TokenCleaner::new(self.tokenizer, stopwords);
        let texts: Vec<&str> = articles.iter().map(|a| a.text.as_str()).collect();
        let documents = cleaner.clean_all(&texts)?;
        let corpus = Corpus::from_documents(&documents)?;
        info!(
            vocabulary = corpus.vocabulary_size(),
            documents = corpus.document_count(),
            "built corpus"
        );

        let topic_count = articles.len();
        let model = self.trainer.train(&corpus, topic_count)?;
        Error::check_alignment("topic training", topic_count, model.topic_count())?;
        let drift = model.positional_drift();
        if !drift.is_empty() {
            debug!(
                drifted = drift.len(),
                ?drift,
                "documents whose dominant topic differs from their positional topic"
            );
        }
        Ok(explain_topics(&model.phi, &corpus, self.options.top_words))
    }

    /// Candidate sentence lists, one per article.
    #[instrument(skip_all, fields(articles = articles.len()))]
    pub fn candidates(&self, articles: &[Article]) -> Result<Vec<Vec<String>>> {
        let extractor = CandidateExtractor::new(self.recognizer)
            .with_min_chars(self.options.min_sentence_chars);
        let texts: Vec<&str> = articles.iter().map(|a| a.text.as_str()).collect();
        let candidates = extractor.extract_all(&texts)?;
        let empty = candidates.iter().filter(|list| list.is_empty()).count();
        if empty > 0 {
            warn!(empty, "articles without candidate sentences");
        }
        Ok(candidates)
    }

    /// Run the whole batch.
    #[instrument(skip_all, fields(articles = articles.len()))]
    pub fn run(&self, articles: &[Article], stopwords: &StopwordSet) -> Result<BatchOutcome> {
        let selector = EventSelector::new(self.options.selector.clone())?;
        let topics = self.explain(articles, stopwords)?;
        let candidates = self.candidates(articles)?;
        Error::check_alignment("candidate generation", topics.len(), candidates.len())?;

        let events = selector.select_all(&candidates, &topics)?;
        Error::check_alignment("event selection", articles.len(), events.len())?;
        info!(
            events = events.iter().map(Vec::len).sum::<usize>(),
            "selected events"
        );
        Ok(BatchOutcome {
            topics,
            candidates,
            events,
        })
    }
}
