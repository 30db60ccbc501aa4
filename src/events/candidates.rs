//! Candidate event sentences: long sentences pairing a time with an actor.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::{
    error::Result,
    nlp::{filters, EntityCategory, EntityRecognizer, EntitySpan},
};

/// Default minimum sentence length, in characters.
pub const DEFAULT_MIN_SENTENCE_CHARS: usize = 16;

static COLON_BREAK_FULL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:：\n)+").expect("valid regex"));
static COLON_BREAK_ASCII: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?::\n)+").expect("valid regex"));
static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[。？！\n]+").expect("valid regex"));

/// Which filter admitted an article's candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidatePass {
    /// Time plus person or organization.
    Primary,
    /// Time only, used when the primary pass kept nothing.
    TimeOnly,
    /// Neither pass kept anything.
    Empty,
}

/// Join dateline-style `label：\n value` breaks so they do not split sentences.
pub fn collapse_colon_breaks(article: &str) -> String {
    let text = COLON_BREAK_FULL.replace_all(article, "：");
    COLON_BREAK_ASCII.replace_all(&text, ":").into_owned()
}

/// Split on runs of `。？！` and newlines, dropping empty segments.
pub fn split_sentences(article: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(article)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Entity categories found in one sentence.
#[derive(Debug, Clone, Copy, Default)]
struct Signals {
    time: bool,
    actor: bool,
}

impl Signals {
    fn from_spans(spans: &[EntitySpan]) -> Self {
        Self {
            time: spans.iter().any(|s| s.category == EntityCategory::Time),
            actor: spans.iter().any(|s| s.category.is_actor()),
        }
    }
}

/// Produces per-article candidate sentence lists.
pub struct CandidateExtractor<'a> {
    recognizer: &'a dyn EntityRecognizer,
    min_chars: usize,
}

impl<'a> CandidateExtractor<'a> {
    pub fn new(recognizer: &'a dyn EntityRecognizer) -> Self {
        Self {
            recognizer,
            min_chars: DEFAULT_MIN_SENTENCE_CHARS,
        }
    }

    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Candidate sentences of one article, blanks removed, in document order.
    pub fn extract(&self, article: &str) -> Result<Vec<String>> {
        self.extract_with_pass(article).map(|(sentences, _)| sentences)
    }

    /// Like [`extract`](Self::extract), also reporting which pass produced the list.
    pub fn extract_with_pass(&self, article: &str) -> Result<(Vec<String>, CandidatePass)> {
        if article.is_empty() {
            return Ok((Vec::new(), CandidatePass::Empty));
        }
        let text = collapse_colon_breaks(article);
        let mut scanned: Vec<(&str, Signals)> = Vec::new();
        for segment in split_sentences(&text) {
            if segment.chars().count() < self.min_chars {
                continue;
            }
            let spans = self.recognizer.recognize(segment)?;
            scanned.push((segment, Signals::from_spans(&spans)));
        }

        let primary: Vec<String> = scanned
            .iter()
            .filter(|(_, signals)| signals.time && signals.actor)
            .map(|(segment, _)| filters::remove_all_blank(segment))
            .collect();
        if !primary.is_empty() {
            return Ok((primary, CandidatePass::Primary));
        }

        let time_only: Vec<String> = scanned
            .iter()
            .filter(|(_, signals)| signals.time)
            .map(|(segment, _)| filters::remove_all_blank(segment))
            .collect();
        let pass = if time_only.is_empty() {
            CandidatePass::Empty
        } else {
            CandidatePass::TimeOnly
        };
        debug!(?pass, count = time_only.len(), "primary pass found no candidates");
        Ok((time_only, pass))
    }

    /// Candidate lists for a whole batch, position-aligned with `articles`.
    pub fn extract_all<S: AsRef<str>>(&self, articles: &[S]) -> Result<Vec<Vec<String>>> {
        articles
            .iter()
            .map(|article| self.extract(article.as_ref()))
            .collect()
    }
}
