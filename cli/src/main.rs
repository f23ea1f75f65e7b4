//! Command-line interface for the quotes service.
//!
//! Commands:
//! - list: Show every quote
//! - login: Exchange credentials for a token
//! - add: Create a quote
//! - edit: Change a quote's phrase or quotee
//! - delete: Remove a quote
//!
//! Configuration via environment:
//! - QUOTES_URL: GraphQL endpoint (default: http://localhost:4000/graphql)
//! - QUOTES_TOKEN: Bearer token for mutations

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    add::AddArgs, delete::DeleteArgs, edit::EditArgs, list::ListArgs, login::LoginArgs,
};

/// Quotes CLI
///
/// JSON output by default; pass --human for formatted text.
#[derive(Parser)]
#[command(name = "quotes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// GraphQL endpoint URL
    #[arg(
        long,
        env = "QUOTES_URL",
        default_value = "http://localhost:4000/graphql",
        global = true
    )]
    url: String,

    /// Bearer token for authenticated operations
    #[arg(long, env = "QUOTES_TOKEN", global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all quotes
    List(ListArgs),

    /// Log in and print a token
    Login(LoginArgs),

    /// Add a new quote
    Add(AddArgs),

    /// Edit an existing quote
    Edit(EditArgs),

    /// Delete a quote
    Delete(DeleteArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client(cli.token.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(&client, &cli.url, cli.human, args).await,
        Commands::Login(args) => commands::login::execute(&client, &cli.url, cli.human, args).await,
        Commands::Add(args) => commands::add::execute(&client, &cli.url, cli.human, args).await,
        Commands::Edit(args) => commands::edit::execute(&client, &cli.url, cli.human, args).await,
        Commands::Delete(args) => {
            commands::delete::execute(&client, &cli.url, cli.human, args).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
