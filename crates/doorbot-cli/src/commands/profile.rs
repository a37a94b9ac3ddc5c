//! Profile command implementation.

use anyhow::{Context, Result};
use clap::Args;

use doorbot::Client;

use crate::output;

#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Print the profile as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(client: &Client, args: ProfileArgs) -> Result<()> {
    let profile = client.profile().await.context("Failed to fetch profile")?;

    if args.json {
        return output::json_pretty(&profile);
    }

    output::heading("Account");
    output::field("    Name", &profile.full_name());
    output::field("  E-Mail", &profile.email);
    if let Some(phone) = &profile.phone_number {
        output::field("   Phone", phone);
    }

    Ok(())
}
