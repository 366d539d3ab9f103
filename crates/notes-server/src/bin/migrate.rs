//! Apply or revert the notes schema.
//!
//! Reads `DATABASE_URL` and the other `DATABASE_*` variables like the server.

use clap::{Parser, Subcommand};
use notes_store::{StoreConfig, schema};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

/// Notes schema migration tool
#[derive(Parser)]
#[command(name = "notes-migrate")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the note table and its index
    Up,
    /// Drop the note table (destroys all notes)
    Down,
    /// Report whether the note table exists
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = StoreConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database_url)
        .await?;

    match cli.command {
        Command::Up => schema::run_migrations(&pool).await?,
        Command::Down => schema::revert_migrations(&pool).await?,
        Command::Status => {
            let initialized = schema::is_schema_initialized(&pool).await?;
            println!(
                "note table: {}",
                if initialized { "present" } else { "absent" }
            );
        }
    }

    pool.close().await;
    Ok(())
}
