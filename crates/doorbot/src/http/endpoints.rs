//! Endpoint paths and request bodies.

use std::fmt;

use serde::Serialize;

// ============================================================================
// Endpoint Paths
// ============================================================================

/// OAuth token exchange, on the OAuth host.
pub const PATH_TOKEN: &str = "/oauth/token";

/// Session establishment.
pub const PATH_SESSION: &str = "/clients_api/session";

/// Currently active dings.
pub const PATH_DINGS: &str = "/clients_api/dings/active";

/// Device inventory.
pub const PATH_DEVICES: &str = "/clients_api/ring_devices";

/// Event history.
pub const PATH_HISTORY: &str = "/clients_api/doorbots/history";

/// Recording of a single event.
pub fn recording_path(id: u64) -> String {
    format!("/clients_api/dings/{}/recording", id)
}

// ============================================================================
// Request Types
// ============================================================================

/// Request body for the OAuth password grant.
#[derive(Serialize)]
pub struct TokenRequest<'a> {
    pub client_id: &'a str,
    pub grant_type: &'a str,
    pub scope: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

impl fmt::Debug for TokenRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRequest")
            .field("client_id", &self.client_id)
            .field("grant_type", &self.grant_type)
            .field("scope", &self.scope)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Request body for session establishment.
#[derive(Debug, Serialize)]
pub struct SessionRequest<'a> {
    pub device: DeviceFingerprint<'a>,
}

/// The pinned device identity the server recognises.
#[derive(Debug, Serialize)]
pub struct DeviceFingerprint<'a> {
    pub hardware_id: &'a str,
    pub os: &'a str,
    pub metadata: DeviceMetadata<'a>,
}

#[derive(Debug, Serialize)]
pub struct DeviceMetadata<'a> {
    pub api_version: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn session_request_shape() {
        let request = SessionRequest {
            device: DeviceFingerprint {
                hardware_id: "hw",
                os: "android",
                metadata: DeviceMetadata { api_version: "9" },
            },
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"device": {"hardware_id": "hw", "os": "android", "metadata": {"api_version": "9"}}})
        );
    }

    #[test]
    fn token_request_hides_password_in_debug() {
        let request = TokenRequest {
            client_id: "ring_official_android",
            grant_type: "password",
            scope: "client",
            username: "alice@example.com",
            password: "secret123",
        };
        assert!(!format!("{:?}", request).contains("secret123"));
        assert_eq!(serde_json::to_value(&request).unwrap()["password"], "secret123");
    }

    #[test]
    fn recording_path_includes_id() {
        assert_eq!(recording_path(42), "/clients_api/dings/42/recording");
    }
}
