//! UPDATE command - Replace all fields of a note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::{HumanReadable, Note, NoteForm, make_request, output};

/// Arguments for the update command.
///
/// All three fields are required; the server does not do partial updates.
#[derive(Args)]
pub struct UpdateArgs {
    /// Note ID
    pub id: i32,

    /// New title
    pub title: String,

    /// New body
    pub body: String,

    /// New status
    pub status: String,
}

#[derive(serde::Serialize)]
#[serde(transparent)]
struct Updated(Note);

impl HumanReadable for Updated {
    fn print_human(&self) {
        println!("{}", "Note updated successfully!".green().bold());
        println!();
        self.0.print_human();
    }
}

/// Execute the update command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: UpdateArgs,
) -> Result<()> {
    let url = format!("{}/note/{}", base_url, args.id);

    let form = NoteForm {
        title: args.title,
        body: args.body,
        status: args.status,
    };

    let note: Note = make_request(client.put(&url).form(&form)).await?;

    output(&Updated(note), human)
}
