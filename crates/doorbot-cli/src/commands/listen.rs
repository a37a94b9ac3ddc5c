//! Listen command implementation.

use std::ops::ControlFlow;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use doorbot::{Client, Ding};

use crate::output;

#[derive(Args, Debug)]
pub struct ListenArgs {
    /// Seconds between polls. Below ~17 the API starts answering 429.
    #[arg(long, default_value_t = doorbot::DEFAULT_POLL_INTERVAL.as_secs())]
    pub interval: u64,

    /// Output dings as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Stop after this many dings
    #[arg(long)]
    pub count: Option<usize>,
}

pub async fn run(client: &Client, args: ListenArgs) -> Result<()> {
    eprintln!("{}", "Listening for Doorbot events:".dimmed());
    eprintln!("{}", "Press Ctrl+C to stop.".dimmed());

    let mut seen = 0usize;
    client
        .listen(Duration::from_secs(args.interval), |ding| {
            print_ding(ding, args.json);
            seen += 1;
            match args.count {
                Some(limit) if seen >= limit => ControlFlow::Break(()),
                _ => ControlFlow::Continue(()),
            }
        })
        .await
        .context("Stopped listening")
}

fn print_ding(ding: &Ding, json: bool) {
    if json {
        if let Err(e) = output::json(ding) {
            eprintln!("{} {}", "ERROR".red(), e);
        }
        return;
    }

    let label = if ding.is_motion() {
        "MOTION".yellow()
    } else {
        "DING".green()
    };
    println!(
        "    {} {} {}",
        label,
        ding.doorbot_description,
        ding.sip_server_address.dimmed()
    );
}
