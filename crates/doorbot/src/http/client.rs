//! Ring REST HTTP client implementation.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument, trace};

use crate::error::{AuthError, Error};

/// HTTP client shared by every call a [`Client`](crate::Client) makes.
///
/// Holds only the connection pool. Tokens are passed in per request.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a new client, optionally with a per-request timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("doorbot/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// POST a JSON body to a token or session endpoint.
    ///
    /// 200, 201 and 202 are success. Anything else is reported as
    /// [`AuthError::Rejected`] with the raw response body.
    #[instrument(skip(self, body, bearer))]
    pub async fn exchange<B, R>(
        &self,
        url: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<R, Error>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!("POST exchange");

        let mut request = self.client.post(url).json(body);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        trace!(status = %status, "exchange response");

        let text = response.text().await?;
        match status {
            StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => {
                Ok(serde_json::from_str(&text)?)
            }
            _ => Err(AuthError::Rejected {
                status: status.as_u16(),
                body: text,
            }
            .into()),
        }
    }

    /// GET an authenticated endpoint and decode the JSON body.
    pub async fn get_json<R>(
        &self,
        url: &str,
        params: &[(&str, String)],
        api_version: &str,
        auth_token: &str,
    ) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let response = self.get(url, params, api_version, auth_token).await?;
        let body = response.bytes().await?;
        trace!(bytes = body.len(), "response body");
        Ok(serde_json::from_slice(&body)?)
    }

    /// GET an authenticated endpoint and hand back the response for streaming.
    ///
    /// `api_version` and `auth_token` are appended after the caller's
    /// parameters. The status is already classified when this returns.
    #[instrument(skip(self, params, auth_token))]
    pub async fn get(
        &self,
        url: &str,
        params: &[(&str, String)],
        api_version: &str,
        auth_token: &str,
    ) -> Result<reqwest::Response, Error> {
        debug!(?params, "GET");

        let response = self
            .client
            .get(url)
            .query(params)
            .query(&[("api_version", api_version), ("auth_token", auth_token)])
            .send()
            .await?;

        let status = response.status();
        trace!(status = %status, "GET response");
        check_status(status)?;

        Ok(response)
    }
}

/// Classify the status of an authenticated data call.
fn check_status(status: StatusCode) -> Result<(), Error> {
    match status {
        StatusCode::OK | StatusCode::CREATED => Ok(()),
        other => Err(Error::from_status(other.as_u16())),
    }
}
