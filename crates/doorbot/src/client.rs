//! The Ring API client.

use std::ops::ControlFlow;
use std::path::Path;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument};

use crate::auth::{self, Credentials, Session};
use crate::config::ClientConfig;
use crate::error::Error;
use crate::http::{ApiClient, PATH_DEVICES, PATH_DINGS, PATH_HISTORY, recording_path};
use crate::models::{Devices, Ding, History, Profile};
use crate::poller::DingPoller;

/// Client for the Ring doorbell API.
///
/// Holds the credentials and configuration only. Every operation logs in
/// from scratch (token exchange, then session), because the per-request
/// token expires about five seconds after it is issued. No state is
/// shared between calls.
///
/// # Example
///
/// ```no_run
/// use doorbot::{Client, Credentials};
///
/// # async fn example() -> Result<(), doorbot::Error> {
/// let client = Client::new(Credentials::new("alice@example.com", "password"))?;
///
/// for entry in client.history(10).await? {
///     println!("{}", entry);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    credentials: Credentials,
    config: ClientConfig,
    api: ApiClient,
}

impl Client {
    /// Create a client with the default configuration.
    pub fn new(credentials: Credentials) -> Result<Self, Error> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self, Error> {
        let api = ApiClient::new(config.timeout())?;
        Ok(Self {
            credentials,
            config,
            api,
        })
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the account username.
    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    /// Run a full authentication cycle and return the new session.
    ///
    /// The session is only good for a few seconds.
    #[instrument(skip(self), fields(username = %self.credentials.username()))]
    pub async fn session(&self) -> Result<Session, Error> {
        info!("Authenticating");

        let token = auth::exchange_token(&self.api, &self.config, &self.credentials).await?;
        auth::establish_session(&self.api, &self.config, &token).await
    }

    /// Returns the account profile.
    pub async fn profile(&self) -> Result<Profile, Error> {
        Ok(self.session().await?.profile)
    }

    /// Returns the devices registered on the account.
    #[instrument(skip(self))]
    pub async fn devices(&self) -> Result<Devices, Error> {
        self.get(PATH_DEVICES, &[]).await
    }

    /// Returns up to `max` history entries, newest first.
    ///
    /// The limit is passed to the server, which decides how many to send.
    #[instrument(skip(self))]
    pub async fn history(&self, max: u32) -> Result<Vec<History>, Error> {
        self.get(PATH_HISTORY, &[("limit", max.to_string())]).await
    }

    /// Returns the dings in progress right now.
    #[instrument(skip(self))]
    pub async fn active_dings(&self) -> Result<Vec<Ding>, Error> {
        self.get(PATH_DINGS, &[]).await
    }

    /// Download the recording of history event `id` into `destination`.
    ///
    /// The file is created (or truncated) before the download starts and is
    /// not removed if the download fails, so a failed call can leave an
    /// empty or partial file behind.
    ///
    /// Returns the number of bytes written.
    #[instrument(skip(self, destination), fields(destination = %destination.as_ref().display()))]
    pub async fn recording(&self, id: u64, destination: impl AsRef<Path>) -> Result<u64, Error> {
        let destination = destination.as_ref();
        let session = self.session().await?;

        let file_error = |source| Error::File {
            path: destination.to_path_buf(),
            source,
        };
        let mut file = File::create(destination).await.map_err(file_error)?;

        let url = self.config.api_base().endpoint(&recording_path(id));
        let mut response = self
            .api
            .get(
                &url,
                &[],
                self.config.api_version(),
                session.auth_token().as_str(),
            )
            .await?;

        let mut written = 0u64;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await.map_err(file_error)?;
            written += chunk.len() as u64;
        }
        file.flush().await.map_err(file_error)?;

        info!(bytes = written, "Recording saved");
        Ok(written)
    }

    /// Returns a poller that fetches active dings every `interval`.
    pub fn poller(&self, interval: Duration) -> DingPoller<'_> {
        DingPoller::new(self, interval)
    }

    /// Poll for dings every `interval`, calling `on_ding` for each one.
    ///
    /// Dings are handed over in the order the server lists them. The loop
    /// runs until either:
    ///
    /// - `on_ding` returns [`ControlFlow::Break`], and this returns `Ok(())`, or
    /// - a poll fails, and this returns that error. Nothing is retried.
    ///
    /// Intervals under about 17 seconds tend to get rate limited; see
    /// [`DEFAULT_POLL_INTERVAL`](crate::DEFAULT_POLL_INTERVAL).
    #[instrument(skip(self, on_ding))]
    pub async fn listen<F>(&self, interval: Duration, mut on_ding: F) -> Result<(), Error>
    where
        F: FnMut(&Ding) -> ControlFlow<()>,
    {
        info!("Listening for dings");

        let mut poller = self.poller(interval);
        loop {
            let dings = poller.next_batch().await?;
            for ding in &dings {
                if on_ding(ding).is_break() {
                    info!("Listener stopped by handler");
                    return Ok(());
                }
            }
        }
    }

    /// Authenticate, then GET `path` on the API host and decode the body.
    async fn get<R>(&self, path: &str, params: &[(&str, String)]) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let session = self.session().await?;
        let url = self.config.api_base().endpoint(path);
        debug!(%url, "Fetching");

        self.api
            .get_json(
                &url,
                params,
                self.config.api_version(),
                session.auth_token().as_str(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_username() {
        let client = Client::new(Credentials::new("alice@example.com", "pw")).unwrap();
        assert_eq!(client.username(), "alice@example.com");
        assert!(!format!("{:?}", client).contains("\"pw\""));
    }
}
