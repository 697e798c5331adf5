//! Partner models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A carrier or shipper booking appointments at hubs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    /// Partner ID
    #[serde(alias = "_id")]
    pub id: String,

    /// Partner name
    pub name: String,

    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Partner category (carrier, shipper, ...)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub partner_type: Option<String>,

    /// Fields not modelled here, kept as sent by the server
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for creating or updating a partner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartnerDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub partner_type: Option<String>,
}
