//! Kiln Core
//!
//! Core types for the Kiln sandbox client.
//!
//! This crate contains:
//! - Domain types: Core business entities (Job, JobStatus, LogSnapshot)
//! - DTOs: Request/response bodies for the sandbox HTTP API

pub mod domain;
pub mod dto;
