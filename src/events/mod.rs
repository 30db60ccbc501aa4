//! Event sentence extraction: candidate generation, selection and the batch pipeline.

pub mod candidates;
pub mod pipeline;
pub mod selector;

pub use candidates::{CandidateExtractor, CandidatePass};
pub use pipeline::{BatchOutcome, EventPipeline, PipelineOptions};
pub use selector::{EventSelector, SelectorOptions};
