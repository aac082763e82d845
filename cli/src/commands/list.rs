//! LIST command - List all notes.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::{format_timestamp, make_request, output, truncate, HumanReadable, Note};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Show at most this many notes
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Notes sorted by last update, newest first.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct NoteList(pub Vec<Note>);

impl NoteList {
    fn new(mut notes: Vec<Note>, limit: Option<usize>) -> Self {
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        if let Some(limit) = limit {
            notes.truncate(limit);
        }
        Self(notes)
    }
}

impl HumanReadable for NoteList {
    fn print_human(&self) {
        println!("{}", "Notes".green().bold());
        println!("{}", "=".repeat(80));
        println!();

        if self.0.is_empty() {
            println!("  {}", "(No notes yet)".dimmed());
            return;
        }

        for note in &self.0 {
            println!("  {}", note.title.bold());
            println!("    {} {}", "ID:".cyan(), note.id);
            println!(
                "    {} {}",
                "Updated:".cyan(),
                format_timestamp(&note.updated_at)
            );
            let preview = note.content.lines().next().unwrap_or_default();
            println!("    {}", truncate(preview, 72).dimmed());
            println!();
        }

        println!("  {} {}", "Total:".cyan(), self.0.len());
    }
}

/// Execute the list command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: ListArgs,
) -> Result<()> {
    let url = format!("{}/api/notes", base_url);

    let notes: Vec<Note> = make_request(client.get(&url)).await?;

    output(&NoteList::new(notes, args.limit), human)
}
