use serde::{Deserialize, Serialize};

use super::de::null_default;
use crate::auth::AuthToken;

/// Account profile.
///
/// `authentication_token` is the per-request credential, valid for about
/// five seconds. It is never serialized back out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub email: String,
    #[serde(deserialize_with = "null_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_default")]
    pub last_name: String,
    pub phone_number: Option<String>,
    #[serde(skip_serializing, deserialize_with = "null_default")]
    pub authentication_token: AuthToken,
}

impl Profile {
    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
