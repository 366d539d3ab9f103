//! LIST command - List all notes.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, Note, make_request, output};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Only show notes with this status
    #[arg(long)]
    pub status: Option<String>,
}

/// Response from listing notes.
#[derive(Debug, Deserialize, Serialize)]
pub struct ListNotesResponse {
    pub notes: Vec<Note>,
}

impl HumanReadable for ListNotesResponse {
    fn print_human(&self) {
        println!("{}", "Notes".green().bold());
        println!("{}", "=".repeat(60));
        println!();

        if self.notes.is_empty() {
            println!("  {}", "(No notes)".dimmed());
            return;
        }

        for note in &self.notes {
            note.print_human();
            println!();
        }

        println!("  {} {}", "Total:".cyan(), self.notes.len());
    }
}

/// Execute the list command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: ListArgs,
) -> Result<()> {
    let url = format!("{}/notes", base_url);

    let mut response: ListNotesResponse = make_request(client.get(&url)).await?;

    if let Some(status) = &args.status {
        response.notes.retain(|note| &note.status == status);
    }

    output(&response, human)
}
