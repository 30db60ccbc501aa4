//! CLI entry-point for event extraction.

use std::io::{self, Write};

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use super::{load_articles, load_stopwords, Engines, InputArgs};
use crate::{config::Settings, events::EventPipeline, report};

/// Args for the `extract` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    #[command(flatten)]
    pub input: InputArgs,
    /// Override the cap on events per article.
    #[arg(long)]
    pub max_events: Option<usize>,
}

#[instrument(skip(settings))]
pub fn run(args: Args, settings: Settings) -> Result<()> {
    let mut settings = args.input.apply(settings);
    if let Some(max_events) = args.max_events {
        settings.max_events = max_events;
    }
    let stopwords = load_stopwords(&settings)?;
    let articles = load_articles(&settings)?;
    let engines = Engines::from_settings(&settings)?;

    let pipeline = EventPipeline::new(&engines.segmenter, &engines.recognizer, &engines.sampler)
        .with_options(settings.pipeline_options());
    let outcome = pipeline.run(&articles, &stopwords)?;
    info!(articles = articles.len(), "extraction finished");

    let records = report::build_records(&articles, &outcome.events, settings.lead_chars);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &records, args.input.format)?;
    out.flush()?;
    Ok(())
}
