//! ADD command - Create a quote.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Deserialize;
use serde_json::json;

use super::{CliError, HumanReadable, Quote, graphql, output};

const MUTATION: &str = r#"
    mutation AddQuote($phrase: String!, $quotee: String) {
        addQuote(phrase: $phrase, quotee: $quotee) { id phrase quotee }
    }
"#;

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// The quoted phrase
    pub phrase: String,

    /// Who said it
    #[arg(short, long)]
    pub quotee: Option<String>,
}

#[derive(Deserialize)]
struct AddData {
    #[serde(rename = "addQuote")]
    add_quote: Option<Quote>,
}

struct Added<'a>(&'a Quote);

/// Execute the add command.
pub async fn execute(
    client: &reqwest::Client,
    url: &str,
    human: bool,
    args: AddArgs,
) -> Result<()> {
    let data: AddData = graphql(
        client,
        url,
        MUTATION,
        json!({ "phrase": args.phrase, "quotee": args.quotee }),
    )
    .await?;

    let quote = data.add_quote.ok_or(CliError::MissingData("addQuote"))?;

    if human {
        Added(&quote).print_human();
        Ok(())
    } else {
        output(&quote, false)
    }
}

impl HumanReadable for Added<'_> {
    fn print_human(&self) {
        println!("{}", "Quote added!".green().bold());
        println!();
        self.0.print_human();
    }
}
