//! ADD command - Create a new note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::{HumanReadable, Note, NoteForm, make_request, output};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Note title (up to 64 characters)
    pub title: String,

    /// Note body (up to 120 characters)
    pub body: String,

    /// Note status, e.g. "open" or "done" (up to 20 characters)
    pub status: String,
}

/// A freshly created note.
#[derive(serde::Serialize)]
#[serde(transparent)]
struct Created(Note);

impl HumanReadable for Created {
    fn print_human(&self) {
        println!("{}", "Note created successfully!".green().bold());
        println!();
        self.0.print_human();
    }
}

/// Execute the add command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: AddArgs,
) -> Result<()> {
    let url = format!("{}/note", base_url);

    let form = NoteForm {
        title: args.title,
        body: args.body,
        status: args.status,
    };

    let note: Note = make_request(client.post(&url).form(&form)).await?;

    output(&Created(note), human)
}
