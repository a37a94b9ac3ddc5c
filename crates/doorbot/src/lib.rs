//! doorbot - Ring video doorbell API client
//!
//! This library logs in to the Ring cloud with an account's username and
//! password and exposes typed calls for the profile, devices, event history,
//! recordings, and polling for live dings.
//!
//! Ring's per-request token lives for about five seconds, so every call
//! performs its own token exchange and session setup. Nothing is cached.
//!
//! # Example
//!
//! ```no_run
//! use std::ops::ControlFlow;
//! use doorbot::{Client, Credentials, DEFAULT_POLL_INTERVAL};
//!
//! # async fn example() -> Result<(), doorbot::Error> {
//! let client = Client::new(Credentials::new("alice@example.com", "password"))?;
//!
//! let profile = client.profile().await?;
//! println!("Logged in as {}", profile.email);
//!
//! client
//!     .listen(DEFAULT_POLL_INTERVAL, |ding| {
//!         println!("{} {}", ding.doorbot_description, ding.sip_server_address);
//!         ControlFlow::Continue(())
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod types;

mod client;
mod http;
mod poller;

// Re-export primary types at crate root for convenience
pub use auth::{Credentials, Session, Token};
pub use client::Client;
pub use config::{ClientConfig, DEFAULT_POLL_INTERVAL};
pub use error::Error;
pub use models::{Devices, Ding, Doorbot, History, Profile};
pub use poller::{DingPoller, RATE_LIMIT_THRESHOLD};
pub use types::ApiUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
