//! Token cleaning: raw article text to the content words fed to the topic model.

use counter::Counter;
use tracing::debug;

use super::{filters, Tokenizer};
use crate::{data::stopwords::StopwordSet, error::Result};

/// Reason a surface token was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    TooShort,
    Stopword,
    Date,
    Email,
    Numeral,
    Url,
}

/// Decide whether a stripped token is kept.
pub fn reject_reason(token: &str, stopwords: &StopwordSet) -> Option<Rejection> {
    if token.chars().count() < 2 {
        Some(Rejection::TooShort)
    } else if stopwords.contains(token) {
        Some(Rejection::Stopword)
    } else if filters::is_trailing_date(token) {
        Some(Rejection::Date)
    } else if filters::is_email(token) {
        Some(Rejection::Email)
    } else if filters::is_numeral(token) {
        Some(Rejection::Numeral)
    } else if filters::is_url(token) {
        Some(Rejection::Url)
    } else {
        None
    }
}

/// Turns documents into filtered content-word sequences.
pub struct TokenCleaner<'a> {
    tokenizer: &'a dyn Tokenizer,
    stopwords: &'a StopwordSet,
}

impl<'a> TokenCleaner<'a> {
    pub fn new(tokenizer: &'a dyn Tokenizer, stopwords: &'a StopwordSet) -> Self {
        Self {
            tokenizer,
            stopwords,
        }
    }

    /// Clean a single document, preserving token order and duplicates.
    pub fn clean(&self, text: &str) -> Result<Vec<String>> {
        let (kept, rejected) = self.clean_with_rejections(text)?;
        debug!(
            kept = kept.len(),
            dropped = rejected.values().sum::<usize>(),
            ?rejected,
            "cleaned document"
        );
        Ok(kept)
    }

    /// Like [`clean`](Self::clean), also counting dropped tokens per reason.
    pub fn clean_with_rejections(&self, text: &str) -> Result<(Vec<String>, Counter<Rejection>)> {
        let mut kept = Vec::new();
        let mut rejected = Counter::new();
        for line in text.split('\n') {
            for surface in self.tokenizer.tokenize(line.trim())? {
                let token = filters::strip_border_blank(&surface);
                match reject_reason(token, self.stopwords) {
                    None => kept.push(token.to_string()),
                    Some(reason) => rejected[&reason] += 1,
                }
            }
        }
        Ok((kept, rejected))
    }

    /// Clean every document of a batch, keeping batch order.
    pub fn clean_all<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<Vec<String>>> {
        texts.iter().map(|text| self.clean(text.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_order_matches_filter_priority() {
        let stopwords = StopwordSet::from_words(["我们"]);
        assert_eq!(reject_reason("的", &stopwords), Some(Rejection::TooShort));
        assert_eq!(reject_reason("我们", &stopwords), Some(Rejection::Stopword));
        assert_eq!(reject_reason("2020年", &stopwords), Some(Rejection::Date));
        assert_eq!(reject_reason("a@b.com", &stopwords), Some(Rejection::Email));
        assert_eq!(reject_reason("2020", &stopwords), Some(Rejection::Numeral));
        assert_eq!(reject_reason("example.cn", &stopwords), Some(Rejection::Url));
        assert_eq!(reject_reason("联合国", &stopwords), None);
    }

    #[test]
    fn dropped_tokens_are_counted_per_reason() {
        let segmenter = crate::nlp::segment::LexiconSegmenter::new();
        let stopwords = StopwordSet::from_words(["总部"]);
        let cleaner = TokenCleaner::new(&segmenter, &stopwords);
        let (kept, rejected) = cleaner
            .clean_with_rejections("张三于2020年1月访问了联合国总部。12345")
            .unwrap();
        assert_eq!(kept, vec!["张三", "访问", "联合国"]);
        assert_eq!(rejected[&Rejection::TooShort], 2);
        assert_eq!(rejected[&Rejection::Date], 2);
        assert_eq!(rejected[&Rejection::Stopword], 1);
        assert_eq!(rejected[&Rejection::Numeral], 1);
        assert_eq!(rejected[&Rejection::Url], 0);
    }
}
