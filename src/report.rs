//! Rendering per-article event lists for people and downstream tools.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::data::Article;

/// Default number of leading characters shown for each article.
pub const DEFAULT_LEAD_CHARS: usize = 16;

/// Output format of the event report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable blocks, one per article.
    #[default]
    Text,
    /// JSON array of `{id, lead, events}` records.
    Json,
    /// One CSV row per event.
    Csv,
}

/// One article's entry in the report. `id` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    pub id: usize,
    pub lead: String,
    pub events: Vec<String>,
}

/// Pair articles with their event lists.
pub fn build_records(
    articles: &[Article],
    events: &[Vec<String>],
    lead_chars: usize,
) -> Vec<EventRecord> {
    articles
        .iter()
        .zip(events)
        .enumerate()
        .map(|(idx, (article, events))| EventRecord {
            id: idx + 1,
            lead: article.lead(lead_chars),
            events: events.clone(),
        })
        .collect()
}

pub fn write_report<W: Write>(out: &mut W, records: &[EventRecord], format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => write_text(out, records),
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
            Ok(())
        }
        ReportFormat::Csv => write_csv(out, records),
    }
}

fn write_text<W: Write>(out: &mut W, records: &[EventRecord]) -> Result<()> {
    for record in records {
        writeln!(out, "ID:\t{}", record.id)?;
        writeln!(out, "导语:\t{}", record.lead)?;
        writeln!(out, "事件:")?;
        for event in &record.events {
            writeln!(out, "{event}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct CsvRow<'a> {
    id: usize,
    lead: &'a str,
    event: &'a str,
}

fn write_csv<W: Write>(out: &mut W, records: &[EventRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for record in records {
        for event in &record.events {
            writer.serialize(CsvRow {
                id: record.id,
                lead: &record.lead,
                event,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}
