//! Topic modeling: corpus construction, LDA training and topic explanation.
//!
//! The topic count equals the batch size and topic `i` is read as the
//! explanation of document `i`. That correspondence is positional only; LDA
//! gives no such guarantee. [`TopicModel::positional_drift`] reports the
//! documents whose dominant topic is not their positional one.

pub mod corpus;
pub mod explain;
pub mod lda;

pub use corpus::Corpus;
pub use explain::{explain_topics, TopicExplanation};
pub use lda::{GibbsConfig, GibbsSampler, TopicModel, TopicTrainer};
