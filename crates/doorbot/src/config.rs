//! Client configuration.

use std::time::Duration;

use crate::error::Error;
use crate::types::ApiUrl;

/// Default data API host.
pub const DEFAULT_API_BASE: &str = "https://api.ring.com";

/// Default OAuth host.
pub const DEFAULT_OAUTH_BASE: &str = "https://oauth.ring.com";

/// Device fingerprint sent on every session establishment.
pub const DEFAULT_HARDWARE_ID: &str = "A9118CAB-A774-40B7-9A83-EA16AE901B6F";

/// API version sent as `api_version` on every call.
pub const DEFAULT_API_VERSION: &str = "9";

/// OAuth client id of the official Android app.
pub const DEFAULT_CLIENT_ID: &str = "ring_official_android";

/// Default interval between active-ding polls.
///
/// Polling faster than about every 17 seconds gets throttled upstream with
/// HTTP 429. The threshold is empirical.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(20);

/// Settings for a [`Client`](crate::Client).
///
/// Everything here is fixed once the client is built.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use doorbot::ClientConfig;
///
/// let config = ClientConfig::default().with_timeout(Duration::from_secs(30));
/// assert_eq!(config.api_version(), "9");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_base: ApiUrl,
    oauth_base: ApiUrl,
    hardware_id: String,
    api_version: String,
    client_id: String,
    timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: ApiUrl::new(DEFAULT_API_BASE).expect("default API URL is valid"),
            oauth_base: ApiUrl::new(DEFAULT_OAUTH_BASE).expect("default OAuth URL is valid"),
            hardware_id: DEFAULT_HARDWARE_ID.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Point data calls at a different API host.
    pub fn with_api_base(mut self, url: impl AsRef<str>) -> Result<Self, Error> {
        self.api_base = ApiUrl::new(url)?;
        Ok(self)
    }

    /// Point token exchange at a different OAuth host.
    pub fn with_oauth_base(mut self, url: impl AsRef<str>) -> Result<Self, Error> {
        self.oauth_base = ApiUrl::new(url)?;
        Ok(self)
    }

    /// Override the device fingerprint.
    pub fn with_hardware_id(mut self, hardware_id: impl Into<String>) -> Self {
        self.hardware_id = hardware_id.into();
        self
    }

    /// Override the OAuth client id.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// Apply a per-request timeout. No timeout is set by default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn api_base(&self) -> &ApiUrl {
        &self.api_base
    }

    pub fn oauth_base(&self) -> &ApiUrl {
        &self.oauth_base
    }

    pub fn hardware_id(&self) -> &str {
        &self.hardware_id
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base().host(), Some("api.ring.com"));
        assert_eq!(config.oauth_base().host(), Some("oauth.ring.com"));
        assert_eq!(config.hardware_id(), DEFAULT_HARDWARE_ID);
        assert_eq!(config.client_id(), "ring_official_android");
        assert!(config.timeout().is_none());
    }

    #[test]
    fn overrides() {
        let config = ClientConfig::default()
            .with_api_base("http://localhost:9000")
            .unwrap()
            .with_hardware_id("hw-1")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.api_base().host(), Some("localhost"));
        assert_eq!(config.hardware_id(), "hw-1");
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn rejects_plain_http_remote() {
        assert!(
            ClientConfig::default()
                .with_oauth_base("http://oauth.ring.com")
                .is_err()
        );
    }
}
