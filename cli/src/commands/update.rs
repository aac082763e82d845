//! UPDATE command - Change a note's title and/or content.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::{make_request, note_url, output, Note};

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Note ID to update
    pub id: String,

    /// New title
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// New content
    #[arg(short = 'c', long)]
    pub content: Option<String>,
}

/// Request body for updating a note. Omitted fields are left unchanged.
#[derive(Debug, Serialize)]
struct UpdateNoteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

/// Execute the update command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: UpdateArgs,
) -> Result<()> {
    if args.title.is_none() && args.content.is_none() {
        eprintln!(
            "{} no --title or --content given; only the update time will change",
            "Warning:".yellow().bold()
        );
    }

    let url = note_url(base_url, &args.id)?;
    let request_body = UpdateNoteRequest {
        title: args.title,
        content: args.content,
    };

    let note: Note = make_request(client.put(url).json(&request_body)).await?;

    if human {
        println!("{}", "Note updated successfully!".green().bold());
        println!();
    }
    output(&note, human)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_omits_absent_fields() {
        let body = UpdateNoteRequest {
            title: None,
            content: Some("new".to_string()),
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"content":"new"}"#);
    }
}
