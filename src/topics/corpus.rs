//! Vocabulary-indexed corpus built from cleaned documents.

use counter::Counter;
use indexmap::IndexSet;

use crate::error::{Error, Result};

/// Word ids in first-seen order plus per-document token ids and counts.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    vocabulary: IndexSet<String>,
    documents: Vec<Vec<usize>>,
    counts: Vec<Counter<usize>>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from a whole batch, failing when nothing survived cleaning.
    pub fn from_documents<D, S>(documents: &[D]) -> Result<Self>
    where
        D: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut corpus = Self::new();
        for document in documents {
            corpus.add_document(document.as_ref());
        }
        if corpus.vocabulary_size() == 0 {
            return Err(Error::EmptyVocabulary {
                documents: documents.len(),
            });
        }
        Ok(corpus)
    }

    /// Append one document; returns its index.
    pub fn add_document<S: AsRef<str>>(&mut self, words: &[S]) -> usize {
        let mut ids = Vec::with_capacity(words.len());
        let mut counts = Counter::new();
        for word in words {
            let id = self.word_id_or_insert(word.as_ref());
            ids.push(id);
            counts[&id] += 1;
        }
        self.documents.push(ids);
        self.counts.push(counts);
        self.documents.len() - 1
    }

    /// Id of `word`, registering it when unseen. Known ids never change.
    pub fn word_id_or_insert(&mut self, word: &str) -> usize {
        match self.vocabulary.get_index_of(word) {
            Some(id) => id,
            None => self.vocabulary.insert_full(word.to_string()).0,
        }
    }

    pub fn word_id(&self, word: &str) -> Option<usize> {
        self.vocabulary.get_index_of(word)
    }

    pub fn word(&self, id: usize) -> Option<&str> {
        self.vocabulary.get_index(id).map(String::as_str)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Token ids of each document in original order.
    pub fn documents(&self) -> &[Vec<usize>] {
        &self.documents
    }

    /// Occurrences of word `id` in document `doc`.
    pub fn count(&self, doc: usize, id: usize) -> usize {
        self.counts.get(doc).map_or(0, |counts| counts[&id])
    }
}
