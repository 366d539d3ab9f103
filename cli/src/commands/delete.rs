//! DELETE command - Delete a note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::{HumanReadable, Note, make_request, output};

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Note ID to delete
    pub id: i32,

    /// Skip confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(serde::Serialize)]
#[serde(transparent)]
struct Deleted(Note);

impl HumanReadable for Deleted {
    fn print_human(&self) {
        println!("{}", "Note deleted successfully!".green().bold());
        println!();
        self.0.print_human();
    }
}

/// Execute the delete command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: DeleteArgs,
) -> Result<()> {
    // Confirmation prompt for interactive use
    if human && !args.yes {
        eprint!(
            "{} Are you sure you want to delete note {}? [y/N] ",
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

    let url = format!("{}/note/{}", base_url, args.id);

    let note: Note = make_request(client.delete(&url)).await?;

    output(&Deleted(note), human)
}
