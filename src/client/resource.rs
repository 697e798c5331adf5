//! Resource descriptors for the CRUD collections exposed by the API

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::models::{
    Appointment, AppointmentDraft, Hub, HubDraft, Partner, PartnerDraft, Slot, SlotDraft,
};

/// A server-side collection with conventional REST routes.
///
/// `GET /{PATH}`, `POST /{PATH}` on the collection and
/// `GET|PUT|DELETE /{PATH}/:id` on items.
pub trait Resource: Send + Sync + 'static {
    /// Collection path segment (e.g. `partners`)
    const PATH: &'static str;

    /// Singular name for messages (e.g. `partner`)
    const NAME: &'static str;

    /// Record returned by the server
    type Record: DeserializeOwned + Serialize + Clone + Debug + Send + Sync + 'static;

    /// Payload accepted by create and update
    type Draft: DeserializeOwned + Serialize + Debug + Send + Sync + 'static;

    /// Collection path, e.g. `/partners`
    fn collection_path() -> String {
        format!("/{}", Self::PATH)
    }

    /// Item path, e.g. `/partners/p-1`
    fn item_path(id: &str) -> String {
        format!("/{}/{}", Self::PATH, encode_segment(id))
    }
}

/// Percent-encode characters that would break out of a single path segment
fn encode_segment(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    for byte in id.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Partners collection
#[derive(Debug, Clone, Copy)]
pub struct Partners;

impl Resource for Partners {
    const PATH: &'static str = "partners";
    const NAME: &'static str = "partner";
    type Record = Partner;
    type Draft = PartnerDraft;
}

/// Hubs collection
#[derive(Debug, Clone, Copy)]
pub struct Hubs;

impl Resource for Hubs {
    const PATH: &'static str = "hubs";
    const NAME: &'static str = "hub";
    type Record = Hub;
    type Draft = HubDraft;
}

/// Slots collection
#[derive(Debug, Clone, Copy)]
pub struct Slots;

impl Resource for Slots {
    const PATH: &'static str = "slots";
    const NAME: &'static str = "slot";
    type Record = Slot;
    type Draft = SlotDraft;
}

/// Appointments collection
#[derive(Debug, Clone, Copy)]
pub struct Appointments;

impl Resource for Appointments {
    const PATH: &'static str = "appointments";
    const NAME: &'static str = "appointment";
    type Record = Appointment;
    type Draft = AppointmentDraft;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Partners::collection_path(), "/partners");
        assert_eq!(Hubs::item_path("h-1"), "/hubs/h-1");
        assert_eq!(Appointments::collection_path(), "/appointments");
    }

    #[test]
    fn test_item_path_encodes_separators() {
        assert_eq!(Slots::item_path("a/b c"), "/slots/a%2Fb%20c");
        assert_eq!(Slots::item_path("../admin"), "/slots/..%2Fadmin");
    }
}
