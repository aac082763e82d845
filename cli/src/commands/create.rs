//! CREATE command - Create a new note.

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::{make_request, Note};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Title for the new note (surrounding whitespace is trimmed)
    pub title: String,

    /// Note content; read from stdin when omitted
    pub content: Option<String>,
}

/// Request body for creating a note.
#[derive(Serialize)]
struct CreateNoteRequest {
    title: String,
    content: String,
}

/// Execute the create command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: CreateArgs,
) -> Result<()> {
    let content = match args.content {
        Some(content) => content,
        None => std::io::read_to_string(std::io::stdin())?,
    };
    if content.is_empty() {
        bail!("note content must not be empty");
    }

    let url = format!("{}/api/notes", base_url);
    let request_body = CreateNoteRequest {
        title: args.title.trim().to_string(),
        content,
    };

    let note: Note = make_request(client.post(&url).json(&request_body)).await?;

    if human {
        println!("{}", "Note created successfully!".green().bold());
        println!();
    }
    super::output(&note, human)
}
