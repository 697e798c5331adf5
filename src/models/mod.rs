//! Display models for CLI output
//!
//! Row types that turn API records into table columns and JSON summaries.

pub mod display;

pub use display::{AppointmentDisplay, HubDisplay, PartnerDisplay, SlotDisplay};
