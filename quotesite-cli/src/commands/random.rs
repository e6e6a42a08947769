//! Print a random quote

use anyhow::{Context, Result};
use clap::Parser;

use quotesite_server::{QuoteStore, QuoteWithAuthor};

use super::{load_config, DatabaseArgs};

#[derive(Parser, Debug)]
pub struct RandomArgs {
    /// Only pick quotes by this author
    #[arg(long)]
    pub author_id: Option<i64>,

    /// Never pick this quote
    #[arg(long)]
    pub exclude: Option<i64>,

    /// Print the quote as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

fn format_quote(quote: &QuoteWithAuthor) -> String {
    format!("\"{}\"\n  - {} (#{})", quote.quote, quote.author_name(), quote.id)
}

pub async fn run_random(args: RandomArgs) -> Result<()> {
    let config = load_config()?;
    let database = args.db.open(&config).await?;

    let id = match args.author_id {
        Some(author_id) => {
            database
                .find_random_quote_by_author_id(author_id, args.exclude)
                .await?
        }
        None => database.find_random_quote(args.exclude).await?,
    };

    let quote = match id {
        Some(id) => database.find_quote_by_id(id).await?,
        None => None,
    }
    .context("No matching quote")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        println!("{}", format_quote(&quote));
    }

    Ok(())
}
