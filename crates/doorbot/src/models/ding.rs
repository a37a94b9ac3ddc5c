use serde::{Deserialize, Serialize};

use super::de::null_default;

/// An in-progress doorbell press or motion event.
///
/// Carries the SIP parameters needed to join the live stream. Only valid
/// while the event is active.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ding {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub id_str: String,
    #[serde(deserialize_with = "null_default")]
    pub state: String,
    #[serde(deserialize_with = "null_default")]
    pub protocol: String,
    #[serde(deserialize_with = "null_default")]
    pub doorbot_id: u64,
    #[serde(deserialize_with = "null_default")]
    pub doorbot_description: String,
    #[serde(deserialize_with = "null_default")]
    pub device_kind: String,
    #[serde(deserialize_with = "null_default")]
    pub motion: bool,
    #[serde(deserialize_with = "null_default")]
    pub kind: String,
    #[serde(rename = "sip_server_ip", deserialize_with = "null_default")]
    pub sip_server_address: String,
    #[serde(rename = "sip_server_port", deserialize_with = "null_default")]
    pub sip_port: u16,
    #[serde(deserialize_with = "null_default")]
    pub sip_server_tls: bool,
    #[serde(deserialize_with = "null_default")]
    pub sip_session_id: String,
    #[serde(deserialize_with = "null_default")]
    pub sip_from: String,
    #[serde(deserialize_with = "null_default")]
    pub sip_to: String,
    #[serde(deserialize_with = "null_default")]
    pub sip_token: String,
    #[serde(deserialize_with = "null_default")]
    pub sip_ding_id: String,
}

impl Ding {
    /// Whether the event came from the motion sensor rather than the button.
    pub fn is_motion(&self) -> bool {
        self.motion || self.kind == "motion"
    }
}
