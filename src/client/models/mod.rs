//! Logistics platform data models
//!
//! Explicit schemas for everything the API returns. Shape mismatches fail at
//! decode time instead of leaking into the commands.

mod appointment;
mod auth;
mod hub;
mod partner;
mod slot;

pub use appointment::{Appointment, AppointmentDraft, AppointmentStatus};
pub use auth::{AuthResponse, Credentials, RegisterRequest, UserProfile};
pub use hub::{Hub, HubDraft};
pub use partner::{Partner, PartnerDraft};
pub use slot::{Slot, SlotDraft};
