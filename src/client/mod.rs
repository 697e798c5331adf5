//! Logistics platform API client
//!
//! [`GatewayClient`] is the HTTP implementation; [`AuthApi`] and
//! [`ResourceApi`] are the seams commands are written against.

pub mod api;
pub mod gateway;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod request;
pub mod resource;

pub use api::{AuthApi, ResourceApi, ResourceGroup, ResourceGroups};
pub use gateway::GatewayClient;
#[cfg(test)]
pub use mock::MockGateway;
pub use resource::{Appointments, Hubs, Partners, Resource, Slots};
