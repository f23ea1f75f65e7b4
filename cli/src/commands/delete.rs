//! DELETE command - Remove a quote.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{CliError, HumanReadable, graphql, output};

const MUTATION: &str = r#"
    mutation DeleteQuote($id: ID!) { deleteQuote(id: $id) { ok } }
"#;

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Quote ID to delete
    pub id: String,

    /// Skip confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Deserialize)]
struct DeleteData {
    #[serde(rename = "deleteQuote")]
    delete_quote: Option<DeleteResponse>,
}

/// Response from deleting a quote.
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteResponse {
    /// Whether a quote existed under the id.
    pub ok: bool,
}

impl HumanReadable for DeleteResponse {
    fn print_human(&self) {
        if self.ok {
            println!("{}", "Quote deleted.".green().bold());
        } else {
            println!("{}", "No quote with that ID; nothing deleted.".yellow());
        }
    }
}

/// Execute the delete command.
pub async fn execute(
    client: &reqwest::Client,
    url: &str,
    human: bool,
    args: DeleteArgs,
) -> Result<()> {
    // Confirmation prompt for interactive use
    if human && !args.yes {
        eprint!(
            "{} Are you sure you want to delete quote {}? [y/N] ",
            "Warning:".yellow().bold(),
            args.id
        );

        use std::io::Write;
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let data: DeleteData = graphql(client, url, MUTATION, json!({ "id": args.id })).await?;
    let response = data
        .delete_quote
        .ok_or(CliError::MissingData("deleteQuote"))?;

    output(&response, human)
}
