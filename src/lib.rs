//! Topic-guided event sentence extraction.
//!
//! For every article in a batch the pipeline keeps long sentences that pair a
//! time expression with a person or organization, trains one LDA topic per
//! article, and selects up to three candidates containing a keyword of the
//! article's positional topic.
//!
//! Tokenization, entity recognition and topic training are injected through
//! [`nlp::Tokenizer`], [`nlp::EntityRecognizer`] and [`topics::TopicTrainer`].

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod logging;
pub mod nlp;
pub mod report;
pub mod topics;

pub use error::{Error, Result};
