//! Token exchange and session establishment.

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::Error;
use crate::http::{
    ApiClient, DeviceFingerprint, DeviceMetadata, PATH_SESSION, PATH_TOKEN, SessionRequest,
    TokenRequest,
};
use crate::models::Profile;

use super::credentials::Credentials;
use super::tokens::{AccessToken, AuthToken, RefreshToken};

/// Response of the OAuth token endpoint.
///
/// Consumed once to establish a [`Session`]. `expires_in` is informational;
/// nothing checks it.
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub access_token: AccessToken,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub refresh_token: RefreshToken,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub token_type: String,
}

/// An established session.
///
/// The embedded [`AuthToken`] expires a few seconds after creation, so a
/// session must not be kept around between calls.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub profile: Profile,
    #[serde(default)]
    pub hardware_id: String,
    #[serde(default)]
    pub user_flow: String,
}

impl Session {
    /// The credential attached to data calls made under this session.
    pub fn auth_token(&self) -> &AuthToken {
        &self.profile.authentication_token
    }
}

/// Exchange the account credentials for an access token.
#[instrument(skip_all, fields(username = %credentials.username()))]
pub(crate) async fn exchange_token(
    api: &ApiClient,
    config: &ClientConfig,
    credentials: &Credentials,
) -> Result<Token, Error> {
    let request = TokenRequest {
        client_id: config.client_id(),
        grant_type: "password",
        scope: "client",
        username: credentials.username(),
        password: credentials.password(),
    };

    let url = config.oauth_base().endpoint(PATH_TOKEN);
    let token: Token = api.exchange(&url, &request, None).await?;

    debug!(expires_in = token.expires_in, "Access token issued");
    Ok(token)
}

/// Trade an access token for a session, presenting the pinned device fingerprint.
#[instrument(skip_all)]
pub(crate) async fn establish_session(
    api: &ApiClient,
    config: &ClientConfig,
    token: &Token,
) -> Result<Session, Error> {
    let request = SessionRequest {
        device: DeviceFingerprint {
            hardware_id: config.hardware_id(),
            os: "android",
            metadata: DeviceMetadata {
                api_version: config.api_version(),
            },
        },
    };

    let url = format!(
        "{}?api_version={}",
        config.api_base().endpoint(PATH_SESSION),
        config.api_version()
    );
    let session: Session = api
        .exchange(&url, &request, Some(token.access_token.as_str()))
        .await?;

    debug!(profile_id = session.profile.id, "Session established");
    Ok(session)
}
