//! Article and stopword sources.

pub mod articles;
pub mod stopwords;

pub use articles::Article;
pub use stopwords::StopwordSet;
