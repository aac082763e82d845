//! Command-line client for the notes backend.
//!
//! Commands:
//! - list: List notes, most recently updated first
//! - show: Fetch a single note
//! - create: Create a note
//! - update: Change a note's title and/or content
//! - delete: Delete a note
//!
//! Configuration via environment:
//! - NOTES_URL: Base URL of the notes server (default: http://localhost:8080)

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    create::CreateArgs, delete::DeleteArgs, list::ListArgs, show::ShowArgs, update::UpdateArgs,
};

/// Notes CLI
///
/// Manage notes on a notes server. Prints JSON by default; pass --human for
/// formatted output.
#[derive(Parser)]
#[command(name = "notes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Notes server URL
    #[arg(
        long,
        env = "NOTES_URL",
        default_value = "http://localhost:8080",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all notes
    List(ListArgs),

    /// Show a single note
    Show(ShowArgs),

    /// Create a new note
    Create(CreateArgs),

    /// Update an existing note
    Update(UpdateArgs),

    /// Delete a note
    Delete(DeleteArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let url = cli.url.trim_end_matches('/');

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(&client, url, cli.human, args).await,
        Commands::Show(args) => commands::show::execute(&client, url, cli.human, args).await,
        Commands::Create(args) => commands::create::execute(&client, url, cli.human, args).await,
        Commands::Update(args) => commands::update::execute(&client, url, cli.human, args).await,
        Commands::Delete(args) => commands::delete::execute(&client, url, cli.human, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
