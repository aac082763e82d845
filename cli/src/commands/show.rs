//! SHOW command - Fetch a single note.

use anyhow::Result;
use clap::Args;

use super::{make_request, note_url, output, Note};

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Note ID to fetch
    pub id: String,
}

/// Execute the show command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: ShowArgs,
) -> Result<()> {
    let url = note_url(base_url, &args.id)?;

    let note: Note = make_request(client.get(url)).await?;

    output(&note, human)
}
