//! Topic-guided selection of event sentences among candidates.

use tracing::debug;

use crate::{
    error::{Error, Result},
    nlp::filters,
    topics::TopicExplanation,
};

/// Default cap on selected events per article.
pub const DEFAULT_MAX_EVENTS: usize = 3;

#[derive(Debug, Clone)]
pub struct SelectorOptions {
    /// Scanning stops once this many events have been chosen.
    pub max_events: usize,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            max_events: DEFAULT_MAX_EVENTS,
        }
    }
}

/// Candidate is eligible for keyword matching.
pub fn is_selectable(candidate: &str) -> bool {
    !filters::is_blank(candidate) && !filters::is_boilerplate(candidate)
}

/// Greedy keyword-overlap selector.
#[derive(Debug, Clone, Default)]
pub struct EventSelector {
    options: SelectorOptions,
}

impl EventSelector {
    pub fn new(options: SelectorOptions) -> Result<Self> {
        if options.max_events == 0 {
            return Err(Error::invalid_config("max_events must be at least 1"));
        }
        Ok(Self { options })
    }

    /// Events of one article.
    ///
    /// A selectable candidate is taken when it contains any keyword of the
    /// article's topic. When nothing matches, the first raw candidate is used
    /// even if it is boilerplate, so an article with candidates always gets
    /// an event.
    pub fn select(&self, candidates: &[String], topic: &TopicExplanation) -> Vec<String> {
        let mut events: Vec<String> = Vec::new();
        for candidate in candidates {
            if events.len() >= self.options.max_events {
                break;
            }
            if !is_selectable(candidate) {
                continue;
            }
            if !topic.words.iter().any(|word| candidate.contains(word.as_str())) {
                continue;
            }
            let event = filters::normalize_event(candidate);
            if !events.contains(&event) {
                events.push(event);
            }
        }
        if events.is_empty() {
            if let Some(first) = candidates.first() {
                debug!("no candidate matched the topic; falling back to the first one");
                events.push(filters::normalize_event(first));
            }
        }
        events
    }

    /// Events for a whole batch; topic `i` is paired with article `i`.
    pub fn select_all(
        &self,
        candidates: &[Vec<String>],
        topics: &[TopicExplanation],
    ) -> Result<Vec<Vec<String>>> {
        Error::check_alignment("event selection", candidates.len(), topics.len())?;
        Ok(candidates
            .iter()
            .zip(topics)
            .map(|(list, topic)| self.select(list, topic))
            .collect())
    }
}
