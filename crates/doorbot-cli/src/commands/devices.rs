//! Devices command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use doorbot::Client;

use crate::output;

#[derive(Args, Debug)]
pub struct DevicesArgs {
    /// Print the device list as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(client: &Client, args: DevicesArgs) -> Result<()> {
    let devices = client.devices().await.context("Failed to fetch devices")?;

    if args.json {
        return output::json_pretty(&devices);
    }

    output::heading("Devices:");
    if devices.doorbots.is_empty() {
        eprintln!("{}", "No doorbots found.".dimmed());
    }
    for bot in &devices.doorbots {
        println!("     {} {}", bot.description, bot.address.dimmed());
    }

    Ok(())
}
