//! EDIT command - Change a quote's phrase or quotee.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::{CliError, HumanReadable, Quote, graphql};

const MUTATION: &str = r#"
    mutation EditQuote($id: ID!, $phrase: String, $quotee: String) {
        editQuote(id: $id, phrase: $phrase, quotee: $quotee) { id phrase quotee }
    }
"#;

/// Arguments for the edit command.
///
/// Only the fields given are changed.
#[derive(Args)]
pub struct EditArgs {
    /// Quote ID to edit
    pub id: String,

    /// New phrase
    #[arg(short, long)]
    pub phrase: Option<String>,

    /// New quotee
    #[arg(short, long, conflicts_with = "clear_quotee")]
    pub quotee: Option<String>,

    /// Remove the quotee
    #[arg(long)]
    pub clear_quotee: bool,
}

impl EditArgs {
    /// Variables for the mutation. Omitted fields stay omitted so the server
    /// keeps them; `--clear-quotee` sends an explicit null.
    fn variables(&self) -> Value {
        let mut vars = Map::new();
        vars.insert("id".to_string(), Value::String(self.id.clone()));
        if let Some(phrase) = &self.phrase {
            vars.insert("phrase".to_string(), Value::String(phrase.clone()));
        }
        if let Some(quotee) = &self.quotee {
            vars.insert("quotee".to_string(), Value::String(quotee.clone()));
        } else if self.clear_quotee {
            vars.insert("quotee".to_string(), Value::Null);
        }
        Value::Object(vars)
    }
}

#[derive(Deserialize)]
struct EditData {
    #[serde(rename = "editQuote")]
    edit_quote: Option<Quote>,
}

/// Execute the edit command.
pub async fn execute(
    client: &reqwest::Client,
    url: &str,
    human: bool,
    args: EditArgs,
) -> Result<()> {
    if args.phrase.is_none() && args.quotee.is_none() && !args.clear_quotee {
        bail!("nothing to change: pass --phrase, --quotee, or --clear-quotee");
    }

    let data: EditData = graphql(client, url, MUTATION, args.variables()).await?;
    let quote = data.edit_quote.ok_or(CliError::MissingData("editQuote"))?;

    if human {
        println!("{}", "Quote updated!".green().bold());
        println!();
        quote.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    }
    Ok(())
}
