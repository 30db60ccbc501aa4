#![allow(dead_code)]

use event_extract::{
    error::Result,
    nlp::{EntityCategory, EntityRecognizer, EntitySpan},
    topics::{Corpus, TopicModel, TopicTrainer},
};

/// Tags every occurrence of the configured keywords.
pub struct KeywordRecognizer {
    keywords: Vec<(&'static str, EntityCategory)>,
}

impl KeywordRecognizer {
    pub fn new(keywords: &[(&'static str, EntityCategory)]) -> Self {
        Self {
            keywords: keywords.to_vec(),
        }
    }
}

impl EntityRecognizer for KeywordRecognizer {
    fn recognize(&self, sentence: &str) -> Result<Vec<EntitySpan>> {
        let mut spans = Vec::new();
        for (keyword, category) in &self.keywords {
            for (start, matched) in sentence.match_indices(keyword) {
                spans.push(EntitySpan::new(*category, start, start + matched.len(), matched));
            }
        }
        Ok(spans)
    }
}

/// Topic `k` is exactly the word distribution of document `k`.
pub struct DocumentTrainer;

impl TopicTrainer for DocumentTrainer {
    fn train(&self, corpus: &Corpus, topics: usize) -> Result<TopicModel> {
        let vocabulary = corpus.vocabulary_size();
        let phi = (0..topics)
            .map(|k| {
                let counts: Vec<f64> = (0..vocabulary)
                    .map(|w| corpus.count(k, w) as f64 + 0.01)
                    .collect();
                let total: f64 = counts.iter().sum();
                counts.into_iter().map(|c| c / total).collect()
            })
            .collect();
        Ok(TopicModel {
            phi,
            theta: Vec::new(),
        })
    }
}

/// Returns one topic fewer than requested.
pub struct ShortTrainer;

impl TopicTrainer for ShortTrainer {
    fn train(&self, corpus: &Corpus, topics: usize) -> Result<TopicModel> {
        let row = vec![1.0 / corpus.vocabulary_size() as f64; corpus.vocabulary_size()];
        Ok(TopicModel {
            phi: vec![row; topics.saturating_sub(1)],
            theta: Vec::new(),
        })
    }
}
