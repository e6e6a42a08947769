//! Bulk import of quotes from JSON or NDJSON
//!
//! Every record is validated before anything is written, so a malformed
//! file imports nothing. Records whose text already exists as an active
//! quote are skipped.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Deserialize;
use serde_json::Value;

use quotesite_server::{NewQuote, QuoteStore};

use super::{load_config, DatabaseArgs};

#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// JSON array or NDJSON file of {quote, first_name, last_name?} records
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Fields read from each record; the whole record is kept as `raw`
#[derive(Debug, Deserialize)]
struct ImportRecord {
    quote: String,
    first_name: String,
    #[serde(default)]
    last_name: Option<String>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub inserted: usize,
    pub skipped: usize,
}

/// Split file content into records. A leading `[` means a JSON array,
/// anything else is read as one JSON object per line.
fn parse_records(content: &str) -> Result<Vec<Value>> {
    if content.trim_start().starts_with('[') {
        return serde_json::from_str(content).context("Invalid JSON array");
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).with_context(|| format!("Invalid JSON on line {}", idx + 1))
        })
        .collect()
}

fn to_new_quote(raw: Value) -> Result<NewQuote> {
    let record = ImportRecord::deserialize(&raw)?;

    if record.quote.trim().is_empty() {
        return Err(anyhow!("quote must not be empty"));
    }

    Ok(NewQuote {
        quote: record.quote,
        first_name: record.first_name,
        last_name: record.last_name.filter(|n| !n.is_empty()),
        raw,
    })
}

/// Insert quotes whose text is not already present.
pub async fn import_quotes<S>(store: &S, quotes: Vec<NewQuote>) -> Result<ImportSummary>
where
    S: QuoteStore + ?Sized,
{
    let mut summary = ImportSummary::default();

    for quote in quotes {
        if store.find_quote_by_text(&quote.quote).await?.is_some() {
            tracing::debug!(quote = %quote.quote, "skipping existing quote");
            summary.skipped += 1;
            continue;
        }

        let id = store.insert_quote(quote).await?;
        tracing::debug!(id, "inserted quote");
        summary.inserted += 1;
    }

    Ok(summary)
}

pub async fn run_import(args: ImportArgs) -> Result<()> {
    let content = std::fs::read_to_string(&args.path)
        .with_context(|| format!("Failed to read {}", args.path.display()))?;

    let quotes = parse_records(&content)?
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| to_new_quote(raw).with_context(|| format!("Invalid record {}", idx + 1)))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(records = quotes.len(), path = %args.path.display(), "importing quotes");

    let config = load_config()?;
    let database = args.db.open(&config).await?;

    let summary = import_quotes(&database, quotes).await?;

    println!("Inserted {}, skipped {}", summary.inserted, summary.skipped);
    Ok(())
}
