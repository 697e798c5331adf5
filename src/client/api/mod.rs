//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Register and login
//! - [`ResourceApi`] - CRUD over partners, hubs, slots and appointments
//!
//! [`ResourceGroups`] layers named per-collection handles on top of
//! [`ResourceApi`].

mod auth;
mod resource;

pub use auth::AuthApi;
pub use resource::{ResourceApi, ResourceGroup, ResourceGroups};
