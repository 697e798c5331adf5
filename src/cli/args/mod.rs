//! Shared CLI argument types

mod common;
mod global;

pub use common::{DataArg, OutputFormat};
pub use global::GlobalOptions;
