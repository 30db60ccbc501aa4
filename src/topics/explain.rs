//! Turning a phi matrix into ranked keyword lists.

use serde::Serialize;

use super::Corpus;

/// Default number of keywords kept per topic.
pub const DEFAULT_TOP_WORDS: usize = 64;

/// Ranked keywords of one topic as parallel word/weight lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicExplanation {
    pub words: Vec<String>,
    pub weights: Vec<f64>,
}

impl TopicExplanation {
    /// Rank one phi row, keeping the `top_n` heaviest words.
    ///
    /// Ties keep vocabulary (first-seen) order.
    pub fn from_row(row: &[f64], corpus: &Corpus, top_n: usize) -> Self {
        let mut ranked: Vec<(usize, f64)> = row.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(top_n);
        let (words, weights) = ranked
            .into_iter()
            .filter_map(|(id, weight)| corpus.word(id).map(|word| (word.to_string(), weight)))
            .unzip();
        Self { words, weights }
    }

    /// Weights rendered as decimal strings, aligned with `words`.
    pub fn weight_strings(&self) -> Vec<String> {
        self.weights.iter().map(|w| w.to_string()).collect()
    }

    /// Iterate `(word, weight)` pairs in rank order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, f64)> {
        self.words
            .iter()
            .map(String::as_str)
            .zip(self.weights.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Explain every topic of `phi`, position-aligned with the topic index.
pub fn explain_topics(phi: &[Vec<f64>], corpus: &Corpus, top_n: usize) -> Vec<TopicExplanation> {
    phi.iter()
        .map(|row| TopicExplanation::from_row(row, corpus, top_n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_weight_and_breaks_ties_by_first_seen() {
        let corpus = Corpus::from_documents(&[vec!["甲乙", "丙丁", "戊己", "庚辛"]]).unwrap();
        let explanation = TopicExplanation::from_row(&[0.1, 0.4, 0.1, 0.4], &corpus, 3);
        assert_eq!(explanation.words, vec!["丙丁", "庚辛", "甲乙"]);
        assert_eq!(explanation.weight_strings(), vec!["0.4", "0.4", "0.1"]);
    }

    #[test]
    fn short_vocabularies_are_not_padded() {
        let corpus = Corpus::from_documents(&[vec!["甲乙"]]).unwrap();
        let topics = explain_topics(&[vec![1.0], vec![1.0]], &corpus, DEFAULT_TOP_WORDS);
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].len(), 1);
    }
}
