//! Hub models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A distribution hub with dock capacity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hub {
    /// Hub ID
    #[serde(alias = "_id")]
    pub id: String,

    /// Hub name
    pub name: String,

    /// Street address or free-form location
    #[serde(default, alias = "address", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Number of docks / concurrent appointments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,

    /// Fields not modelled here, kept as sent by the server
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for creating or updating a hub
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HubDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}
