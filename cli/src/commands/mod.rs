//! Command implementations for the quotes CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable and JSON output formatting

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod login;

use anyhow::Result;
use colored::Colorize;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Common error type for GraphQL requests.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("{message}{}", .code.as_deref().map(|c| format!(" ({})", c)).unwrap_or_default())]
    GraphQl {
        message: String,
        code: Option<String>,
    },

    #[error("Response contained no data for {0}")]
    MissingData(&'static str),
}

/// A quote as returned by the server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Quote {
    pub id: String,
    pub phrase: String,
    pub quotee: Option<String>,
}

impl Quote {
    /// Print the quote as an indented block.
    fn print_block(&self) {
        println!("  \"{}\"", self.phrase.bold());
        if let Some(quotee) = &self.quotee {
            println!("    {} {}", "-".dimmed(), quotee.italic());
        }
        println!("    {} {}", "ID:".cyan(), self.id);
    }
}

impl HumanReadable for Quote {
    fn print_human(&self) {
        self.print_block();
    }
}

/// Build an HTTP client, optionally configured with a Bearer token.
pub fn build_client(token: Option<&str>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();

    if let Some(token) = token {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| anyhow::anyhow!("Invalid token value: {}", e))?;
        headers.insert(AUTHORIZATION, value);
        builder = builder.default_headers(headers);
    }

    Ok(builder.build()?)
}

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct GraphQlEnvelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorBody>,
}

#[derive(Deserialize)]
struct GraphQlErrorBody {
    message: String,
    #[serde(default)]
    extensions: Option<Value>,
}

/// Send one GraphQL operation and decode its `data`.
///
/// The first entry of `errors`, if any, becomes `CliError::GraphQl`.
pub async fn graphql<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    query: &str,
    variables: Value,
) -> Result<T, CliError> {
    let response = client
        .post(url)
        .json(&GraphQlRequest { query, variables })
        .send()
        .await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CliError::Server {
            status: status.as_u16(),
            message: body,
        });
    }

    let envelope: GraphQlEnvelope<T> = response.json().await?;
    into_data(envelope)
}

fn into_data<T>(envelope: GraphQlEnvelope<T>) -> Result<T, CliError> {
    if let Some(first) = envelope.errors.into_iter().next() {
        let code = first
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .and_then(Value::as_str)
            .map(str::to_string);
        return Err(CliError::GraphQl {
            message: first.message,
            code,
        });
    }

    envelope.data.ok_or(CliError::MissingData("operation"))
}

/// Truncate a string for display, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
