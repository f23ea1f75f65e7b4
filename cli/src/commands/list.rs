//! LIST command - Show every quote.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{HumanReadable, Quote, graphql, output, truncate};

const QUERY: &str = "query { quotes { id phrase quotee } }";

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Shorten phrases longer than this many characters (human output only)
    #[arg(long, default_value_t = 72)]
    pub width: usize,
}

#[derive(Deserialize)]
struct QuotesData {
    quotes: Option<Vec<Option<Quote>>>,
}

/// All quotes, in server order.
#[derive(Debug, Serialize)]
pub struct QuoteList {
    pub quotes: Vec<Quote>,
    #[serde(skip)]
    width: usize,
}

impl HumanReadable for QuoteList {
    fn print_human(&self) {
        println!("{}", "Quotes".green().bold());
        println!("{}", "=".repeat(80));
        println!();

        if self.quotes.is_empty() {
            println!("  {}", "(No quotes yet)".dimmed());
            return;
        }

        for quote in &self.quotes {
            println!("  \"{}\"", truncate(&quote.phrase, self.width).bold());
            if let Some(quotee) = &quote.quotee {
                println!("    {} {}", "-".dimmed(), quotee.italic());
            }
            println!("    {} {}", "ID:".cyan(), quote.id);
            println!();
        }

        println!("  {} {}", "Total:".cyan(), self.quotes.len());
    }
}

/// Execute the list command.
pub async fn execute(
    client: &reqwest::Client,
    url: &str,
    human: bool,
    args: ListArgs,
) -> Result<()> {
    let data: QuotesData = graphql(client, url, QUERY, json!({})).await?;

    let list = QuoteList {
        quotes: data.quotes.unwrap_or_default().into_iter().flatten().collect(),
        width: args.width,
    };

    output(&list, human)
}
