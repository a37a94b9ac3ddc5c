//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{devices, history, listen, profile, recording};

/// Ring doorbell CLI.
#[derive(Parser, Debug)]
#[command(name = "doorbot")]
#[command(author, version = env!("DOORBOT_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Ring account e-mail address
    #[arg(long, env = "RING_USERNAME", global = true)]
    pub username: Option<String>,

    /// Ring account password
    #[arg(long, env = "RING_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Override the API host
    #[arg(long, env = "RING_API_BASE", hide = true, global = true)]
    pub api_base: Option<String>,

    /// Override the OAuth host
    #[arg(long, env = "RING_OAUTH_BASE", hide = true, global = true)]
    pub oauth_base: Option<String>,

    /// Per-request timeout in seconds (none by default)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the account profile
    Profile(profile::ProfileArgs),

    /// List devices on the account
    Devices(devices::DevicesArgs),

    /// List recent events, optionally saving their recordings
    History(history::HistoryArgs),

    /// Download the recording of one event
    Recording(recording::RecordingArgs),

    /// Poll for doorbell presses and motion events
    Listen(listen::ListenArgs),
}
