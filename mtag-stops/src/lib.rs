//! Stop listings for the Grenoble SEM transit network.
//!
//! Fetches route schedules from the Mobilités M open data API, extracts the
//! stops served in each direction and renders them as text.

pub mod config;
pub mod domain;
pub mod lines;
pub mod schedule;
