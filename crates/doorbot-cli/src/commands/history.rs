//! History command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use doorbot::Client;

use super::recording::recording_file_name;
use crate::output;

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Maximum number of entries to request
    #[arg(long, default_value_t = 10)]
    pub limit: u32,

    /// Save the recordings of the first N entries
    #[arg(long, default_value_t = 0)]
    pub save_recordings: usize,

    /// Directory to save recordings into
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Print entries as JSON lines
    #[arg(long)]
    pub json: bool,
}

pub async fn run(client: &Client, args: HistoryArgs) -> Result<()> {
    let history = client
        .history(args.limit)
        .await
        .context("Failed to fetch history")?;

    if args.json {
        for entry in &history {
            output::json(entry)?;
        }
    } else {
        output::heading("History:");
        if history.is_empty() {
            eprintln!("{}", "No events found.".dimmed());
        }
        for entry in &history {
            println!("     {}", entry);
        }
    }

    let count = args.save_recordings.min(history.len());
    for entry in &history[..count] {
        let destination = args.output_dir.join(recording_file_name(entry.id));
        eprintln!(
            "{} {}",
            "Saving Recording:".dimmed(),
            destination.display()
        );
        client
            .recording(entry.id, &destination)
            .await
            .with_context(|| format!("Failed to save recording {}", entry.id))?;
    }
    if count > 0 {
        output::success(&format!("Saved {} recording(s)", count));
    }

    Ok(())
}
