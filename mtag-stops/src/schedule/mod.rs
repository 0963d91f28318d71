//! Route schedule retrieval and stop extraction.
//!
//! A schedule is fetched as an untyped [`RouteDocument`] and then projected
//! into domain [`Station`](crate::domain::Station)s by [`extract_stations`].
//! Fetching never validates shape; extraction never does I/O.

mod client;
mod error;
mod extract;
mod fixtures;
mod source;
mod types;

pub use client::{DEFAULT_BASE_URL, MtagClient, MtagClientConfig};
pub use error::ScheduleError;
pub use extract::extract_stations;
pub use fixtures::FixtureSource;
pub use source::ScheduleSource;
pub use types::RouteDocument;
