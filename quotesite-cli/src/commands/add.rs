//! Add a single quote

use anyhow::{Context, Result};
use clap::Parser;

use quotesite_server::{NewQuote, QuoteStore};

use super::{load_config, DatabaseArgs};

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Quote text
    #[arg(long)]
    pub quote: String,

    /// Author first name
    #[arg(long)]
    pub first_name: String,

    /// Author last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// Original payload to keep alongside the quote (JSON)
    #[arg(long, value_name = "JSON")]
    pub raw: Option<String>,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

impl AddArgs {
    fn new_quote(&self) -> Result<NewQuote> {
        let raw = match self.raw.as_deref() {
            Some(raw) => serde_json::from_str(raw).context("--raw is not valid JSON")?,
            None => serde_json::Value::Null,
        };

        Ok(NewQuote {
            quote: self.quote.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone().filter(|n| !n.is_empty()),
            raw,
        })
    }
}

pub async fn run_add(args: AddArgs) -> Result<()> {
    let quote = args.new_quote()?;

    let config = load_config()?;
    let database = args.db.open(&config).await?;

    let id = database
        .insert_quote(quote)
        .await
        .context("Failed to insert quote")?;

    println!("{}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parses_raw_json() {
        let args = AddArgs::try_parse_from([
            "add",
            "--quote",
            "Be brief.",
            "--first-name",
            "Anon",
            "--raw",
            r#"{"source":"cli"}"#,
        ])
        .unwrap();

        let quote = args.new_quote().unwrap();
        assert_eq!(quote.raw["source"], "cli");
        assert_eq!(quote.last_name, None);
    }

    #[test]
    fn rejects_invalid_raw() {
        let args = AddArgs::try_parse_from([
            "add",
            "--quote",
            "x",
            "--first-name",
            "y",
            "--raw",
            "{not json",
        ])
        .unwrap();

        assert!(args.new_quote().is_err());
    }
}
