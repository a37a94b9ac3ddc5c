//! Recording command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use doorbot::Client;

use crate::output;

#[derive(Args, Debug)]
pub struct RecordingArgs {
    /// Event id, as shown by `doorbot history --json`
    #[arg(long)]
    pub id: u64,

    /// Destination file (defaults to saved-recording-<id>.mp4)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// File name used when saving the recording of event `id`.
pub fn recording_file_name(id: u64) -> String {
    format!("saved-recording-{}.mp4", id)
}

pub async fn run(client: &Client, args: RecordingArgs) -> Result<()> {
    let destination = args
        .output
        .unwrap_or_else(|| PathBuf::from(recording_file_name(args.id)));

    let bytes = client
        .recording(args.id, &destination)
        .await
        .with_context(|| format!("Failed to save recording {}", args.id))?;

    output::success(&format!(
        "Saved {} bytes to {}",
        bytes,
        destination.display()
    ));

    Ok(())
}
