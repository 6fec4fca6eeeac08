//! Core domain types
//!
//! This module contains the domain structures shared across Kiln crates.
//! They model the backend's job records and log captures as the client
//! observes them over the wire.

pub mod job;
pub mod log;
