use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de::null_default;

/// Partial recording record embedded in a history entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordingRef {
    #[serde(deserialize_with = "null_default")]
    pub status: String,
}

/// Partial doorbot record embedded in other records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorbotRef {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
}

/// A past doorbell or motion event.
///
/// The `id` is what [`Client::recording`](crate::Client::recording) takes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct History {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_default")]
    pub answered: bool,
    #[serde(deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub favorite: bool,
    #[serde(deserialize_with = "null_default")]
    pub snapshot_url: String,
    #[serde(deserialize_with = "null_default")]
    pub recording: RecordingRef,
    #[serde(deserialize_with = "null_default")]
    pub doorbot: DoorbotRef,
}

impl History {
    /// `created_at` parsed as an RFC 3339 timestamp, if it is one.
    pub fn created_at_time(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} {}",
            self.created_at, self.doorbot.description, self.kind, self.answered
        )
    }
}
