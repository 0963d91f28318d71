//! Core domain types.
//!
//! These are validated, immutable values produced from the raw schedule
//! documents. Nothing here performs I/O.

mod route;
mod station;

pub use route::{InvalidRouteName, RouteName};
pub use station::{ParentStation, Station};
