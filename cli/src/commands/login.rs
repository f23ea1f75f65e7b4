//! LOGIN command - Exchange credentials for a bearer token.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{CliError, HumanReadable, graphql, output};

const MUTATION: &str = r#"
    mutation Login($username: String!, $password: String!) {
        login(username: $username, password: $password) { token }
    }
"#;

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Username to log in as
    pub username: String,

    /// Password (prompted on stdin when omitted)
    #[arg(long, env = "QUOTES_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Deserialize)]
struct LoginData {
    login: Option<Authentication>,
}

/// Token returned by a successful login.
#[derive(Debug, Deserialize, Serialize)]
pub struct Authentication {
    pub token: String,
}

impl HumanReadable for Authentication {
    fn print_human(&self) {
        println!("{}", "Logged in.".green().bold());
        println!();
        println!("  {} {}", "Token:".cyan(), self.token);
        println!();
        println!("  {}", "To use it for later commands:".dimmed());
        println!("  export QUOTES_TOKEN={}", self.token);
    }
}

fn prompt_password() -> Result<String> {
    eprint!("Password: ");
    std::io::stderr().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Execute the login command.
pub async fn execute(
    client: &reqwest::Client,
    url: &str,
    human: bool,
    args: LoginArgs,
) -> Result<()> {
    let password = match args.password {
        Some(p) => p,
        None => prompt_password()?,
    };

    let data: LoginData = graphql(
        client,
        url,
        MUTATION,
        json!({ "username": args.username, "password": password }),
    )
    .await?;

    let auth = data.login.ok_or(CliError::MissingData("login"))?;
    output(&auth, human)
}
