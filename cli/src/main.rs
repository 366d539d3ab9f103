//! Command-line client for the notes service.
//!
//! Commands:
//! - add: Create a note
//! - get: Show one note
//! - update: Replace a note's title, body and status
//! - delete: Delete a note
//! - list: List all notes
//!
//! Configuration via environment:
//! - NOTES_URL: Base URL of the notes server (default: http://localhost:5000)

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    add::AddArgs, delete::DeleteArgs, get::GetArgs, list::ListArgs, update::UpdateArgs,
};

/// Notes service CLI
///
/// Prints JSON by default; pass --human for formatted output.
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
        default_value = "http://localhost:5000",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new note
    Add(AddArgs),

    /// Show a single note
    Get(GetArgs),

    /// Replace the title, body and status of a note
    Update(UpdateArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// List all notes
    List(ListArgs),
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

    let base_url = cli.url.trim_end_matches('/');

    let result = match cli.command {
        Commands::Add(args) => commands::add::execute(&client, base_url, cli.human, args).await,
        Commands::Get(args) => commands::get::execute(&client, base_url, cli.human, args).await,
        Commands::Update(args) => {
            commands::update::execute(&client, base_url, cli.human, args).await
        }
        Commands::Delete(args) => {
            commands::delete::execute(&client, base_url, cli.human, args).await
        }
        Commands::List(args) => commands::list::execute(&client, base_url, cli.human, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
