//! CLI entry-point for inspecting the topic paired with each article.

use std::io::{self, Write};

use anyhow::Result;
use clap::Args as ClapArgs;
use serde::Serialize;
use tracing::instrument;

use super::{load_articles, load_stopwords, Engines, InputArgs};
use crate::{config::Settings, events::EventPipeline, report::ReportFormat};

/// Args for the `topics` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    #[command(flatten)]
    pub input: InputArgs,
    /// Keywords shown per topic.
    #[arg(long, default_value_t = 10)]
    pub show: usize,
}

#[derive(Serialize)]
struct TopicRow<'a> {
    id: usize,
    word: &'a str,
    weight: String,
}

#[instrument(skip(settings))]
pub fn run(args: Args, settings: Settings) -> Result<()> {
    let settings = args.input.apply(settings);
    let stopwords = load_stopwords(&settings)?;
    let articles = load_articles(&settings)?;
    let engines = Engines::from_settings(&settings)?;
    let pipeline = EventPipeline::new(&engines.segmenter, &engines.recognizer, &engines.sampler)
        .with_options(settings.pipeline_options());
    let topics = pipeline.explain(&articles, &stopwords)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.input.format {
        ReportFormat::Text => {
            for (idx, (topic, article)) in topics.iter().zip(&articles).enumerate() {
                writeln!(out, "ID:\t{}", idx + 1)?;
                writeln!(out, "导语:\t{}", article.lead(settings.lead_chars))?;
                let weights = topic.weight_strings();
                for (word, weight) in topic.words.iter().zip(&weights).take(args.show) {
                    writeln!(out, "{word}\t{weight}")?;
                }
                writeln!(out)?;
            }
        }
        ReportFormat::Json => {
            let shown: Vec<_> = topics
                .iter()
                .map(|topic| topic.pairs().take(args.show).collect::<Vec<_>>())
                .collect();
            serde_json::to_writer_pretty(&mut out, &shown)?;
            writeln!(out)?;
        }
        ReportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut out);
            for (idx, topic) in topics.iter().enumerate() {
                let weights = topic.weight_strings();
                for (word, weight) in topic.words.iter().zip(weights).take(args.show) {
                    writer.serialize(TopicRow {
                        id: idx + 1,
                        word,
                        weight,
                    })?;
                }
            }
            writer.flush()?;
        }
    }
    out.flush()?;
    Ok(())
}
