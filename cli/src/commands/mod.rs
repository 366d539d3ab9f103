//! Command implementations for the notes CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//!
//! Output formatting is shared here since every command prints notes.

pub mod add;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Common error type for HTTP requests.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// A note as returned by the server.
#[derive(Debug, Deserialize, Serialize)]
pub struct Note {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub status: String,
}

/// Form fields sent on add and update.
#[derive(Debug, Serialize)]
pub struct NoteForm {
    pub title: String,
    pub body: String,
    pub status: String,
}

/// Build the HTTP client used by all commands.
pub fn build_client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder().build()?)
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

impl HumanReadable for Note {
    fn print_human(&self) {
        println!("  {} {}", "ID:".cyan(), self.id);
        println!("  {} {}", "Title:".cyan(), self.title.bold());
        println!("  {} {}", "Body:".cyan(), self.body);
        println!("  {} {}", "Status:".cyan(), self.status);
    }
}

/// Send a request and decode a JSON success body.
///
/// Non-2xx responses become `CliError::Server`, carrying the server's
/// `message` field when the body has one.
pub async fn make_request<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, CliError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CliError::Server {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Extract the `message` field of an error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
