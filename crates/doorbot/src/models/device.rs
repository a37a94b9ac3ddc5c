use serde::{Deserialize, Serialize};

use super::de::{lenient_string, null_default};

/// Devices on the account, grouped by kind.
///
/// Only doorbots are modelled. The other groups are kept as raw JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Devices {
    #[serde(deserialize_with = "null_default")]
    pub doorbots: Vec<Doorbot>,
    #[serde(deserialize_with = "null_default")]
    pub authorized_doorbots: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_default")]
    pub chimes: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_default")]
    pub stickup_cams: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_default")]
    pub base_stations: Vec<serde_json::Value>,
}

/// A doorbell device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Doorbot {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub device_id: String,
    #[serde(deserialize_with = "null_default")]
    pub time_zone: String,
    #[serde(deserialize_with = "null_default")]
    pub subscribed: bool,
    #[serde(deserialize_with = "null_default")]
    pub subscribed_motions: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub battery_life: String,
    #[serde(deserialize_with = "null_default")]
    pub external_connection: bool,
    #[serde(deserialize_with = "null_default")]
    pub firmware_version: String,
    #[serde(deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub latitude: f64,
    #[serde(deserialize_with = "null_default")]
    pub longitude: f64,
    #[serde(deserialize_with = "null_default")]
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_doorbots_and_keeps_other_groups_raw() {
        let devices: Devices = serde_json::from_value(json!({
            "doorbots": [{
                "id": 12345,
                "description": "Front Door",
                "device_id": "abcdef",
                "time_zone": "America/New_York",
                "subscribed": true,
                "subscribed_motions": false,
                "battery_life": 87,
                "external_connection": false,
                "firmware_version": "1.9.3",
                "kind": "doorbell_v3",
                "latitude": 40.7,
                "longitude": -74.0,
                "address": "1 Main St",
                "settings": {"chime_settings": {}}
            }],
            "chimes": [{"id": 9}]
        }))
        .unwrap();

        assert_eq!(devices.doorbots.len(), 1);
        let bot = &devices.doorbots[0];
        assert_eq!(bot.description, "Front Door");
        assert_eq!(bot.battery_life, "87");
        assert!(bot.subscribed);
        assert_eq!(devices.chimes.len(), 1);
        assert!(devices.stickup_cams.is_empty());
    }

    #[test]
    fn null_groups_and_fields_fall_back_to_defaults() {
        let devices: Devices = serde_json::from_value(json!({
            "doorbots": [{"id": 1, "description": "Front Door", "address": null, "latitude": null}],
            "chimes": null,
            "base_stations": null
        }))
        .unwrap();

        assert_eq!(devices.doorbots[0].address, "");
        assert_eq!(devices.doorbots[0].latitude, 0.0);
        assert!(devices.chimes.is_empty());
        assert!(devices.base_stations.is_empty());
    }

    #[test]
    fn battery_life_accepts_string_and_null() {
        let a: Doorbot = serde_json::from_value(json!({"battery_life": "100"})).unwrap();
        let b: Doorbot = serde_json::from_value(json!({"battery_life": null})).unwrap();
        assert_eq!(a.battery_life, "100");
        assert_eq!(b.battery_life, "");
    }
}
