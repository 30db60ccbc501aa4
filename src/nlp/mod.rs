//! Linguistic collaborators and token-level cleaning.
//!
//! The pipeline only sees the [`Tokenizer`] and [`EntityRecognizer`] traits.
//! [`segment::LexiconSegmenter`] and [`ner::LexiconRecognizer`] are the
//! default engines; tests and embedders may inject their own.

pub mod clean;
pub mod filters;
pub mod ner;
pub mod segment;

use serde::Serialize;

use crate::error::Result;

/// Splits text into ordered surface tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

/// Tags entity spans in a single sentence.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, sentence: &str) -> Result<Vec<EntitySpan>>;
}

/// Entity categories the candidate extractor cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    Time,
    Person,
    Organization,
    Other,
}

impl EntityCategory {
    /// Person or organization, the "actor" side of an event.
    pub fn is_actor(self) -> bool {
        matches!(self, Self::Person | Self::Organization)
    }
}

/// Tagged entity span with byte offsets relative to the sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub category: EntityCategory,
    pub text: String,
}

impl EntitySpan {
    pub fn new(category: EntityCategory, start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            category,
            text: text.into(),
        }
    }
}

/// Han ideograph test used by the segmenter and recognizer.
pub fn is_han(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c) || ('\u{3400}'..='\u{4dbf}').contains(&c)
}
