//! Polling for active dings.

use std::time::Duration;

use tracing::{debug, warn};

use crate::client::Client;
use crate::error::Error;
use crate::models::Ding;

/// Polls shorter than this are likely to be answered with HTTP 429.
pub const RATE_LIMIT_THRESHOLD: Duration = Duration::from_secs(17);

/// Fetches active dings at a fixed interval.
///
/// The first call to [`next_batch`](Self::next_batch) polls immediately;
/// each later call sleeps for the interval first. There is no backoff and
/// no retry: an error is returned as-is and the caller decides whether to
/// keep going.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use doorbot::{Client, Credentials};
///
/// # async fn example() -> Result<(), doorbot::Error> {
/// let client = Client::new(Credentials::new("alice@example.com", "password"))?;
/// let mut poller = client.poller(Duration::from_secs(20));
///
/// loop {
///     for ding in poller.next_batch().await? {
///         println!("{} at {}", ding.state, ding.doorbot_description);
///     }
/// }
/// # }
/// ```
#[derive(Debug)]
pub struct DingPoller<'a> {
    client: &'a Client,
    interval: Duration,
    polls: u64,
}

impl<'a> DingPoller<'a> {
    pub(crate) fn new(client: &'a Client, interval: Duration) -> Self {
        if interval < RATE_LIMIT_THRESHOLD {
            warn!(
                interval_secs = interval.as_secs_f64(),
                "Poll interval is below {}s, expect rate limiting",
                RATE_LIMIT_THRESHOLD.as_secs()
            );
        }

        Self {
            client,
            interval,
            polls: 0,
        }
    }

    /// The pause between polls.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of polls issued so far, successful or not.
    pub fn polls(&self) -> u64 {
        self.polls
    }

    /// Wait for the next poll slot and return the dings active at that moment.
    pub async fn next_batch(&mut self) -> Result<Vec<Ding>, Error> {
        if self.polls > 0 {
            tokio::time::sleep(self.interval).await;
        }
        self.polls += 1;

        let dings = self.client.active_dings().await?;
        debug!(poll = self.polls, count = dings.len(), "Polled active dings");
        Ok(dings)
    }
}
