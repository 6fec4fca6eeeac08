//! Data Transfer Objects for the sandbox HTTP API
//!
//! Request and response bodies exchanged with the backend. These are
//! lightweight wire representations; the richer domain types live in
//! [`crate::domain`].

pub mod job;
