//! CLI entry-point for listing candidate event sentences.

use std::io::{self, Write};

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use super::{load_articles, Engines, InputArgs};
use crate::{config::Settings, events::EventPipeline, report};

/// Args for the `candidates` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    #[command(flatten)]
    pub input: InputArgs,
}

#[instrument(skip(settings))]
pub fn run(args: Args, settings: Settings) -> Result<()> {
    let settings = args.input.apply(settings);
    let articles = load_articles(&settings)?;
    let engines = Engines::from_settings(&settings)?;
    let pipeline = EventPipeline::new(&engines.segmenter, &engines.recognizer, &engines.sampler)
        .with_options(settings.pipeline_options());
    let candidates = pipeline.candidates(&articles)?;

    let records = report::build_records(&articles, &candidates, settings.lead_chars);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &records, args.input.format)?;
    out.flush()?;
    Ok(())
}
