//! Time slot models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A bookable time window at a hub
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// Slot ID
    #[serde(alias = "_id")]
    pub id: String,

    /// Hub this slot belongs to
    #[serde(alias = "hub")]
    pub hub_id: String,

    /// Window start
    pub start_time: DateTime<Utc>,

    /// Window end
    pub end_time: DateTime<Utc>,

    /// Appointments the window can take
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,

    /// Whether the slot can still be booked
    #[serde(default = "default_available", alias = "isAvailable")]
    pub available: bool,

    /// Fields not modelled here, kept as sent by the server
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_available() -> bool {
    true
}

/// Payload for creating or updating a slot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SlotDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hub_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_parses_timestamps() {
        let slot: Slot = serde_json::from_str(
            r#"{"id":"s-1","hubId":"h-1","startTime":"2025-03-01T08:00:00Z","endTime":"2025-03-01T09:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(slot.hub_id, "h-1");
        assert!(slot.available);
        assert!(slot.end_time > slot.start_time);
    }

    #[test]
    fn test_slot_rejects_bad_timestamp() {
        let result = serde_json::from_str::<Slot>(
            r#"{"id":"s-1","hubId":"h-1","startTime":"tomorrow","endTime":"2025-03-01T09:00:00Z"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_slot_draft_serializes_camel_case() {
        let draft = SlotDraft {
            hub_id: Some("h-1".to_string()),
            capacity: Some(4),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["hubId"], "h-1");
        assert!(json.get("startTime").is_none());
    }
}
