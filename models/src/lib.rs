//! Domain models for the task dashboard.
//!
//! This crate contains pure data structures: the validated client
//! configuration and the payloads exchanged with the extraction backend.
//! Models have no I/O - they're just data passed between layers.
//!
//! ## Architecture
//!
//! - **models** (this crate): Pure data structures
//! - **client-core**: HTTP client and task post-processing operating on models
//! - **task-dashboard**: Application wiring everything together

pub mod client_config;
pub mod error;
pub mod payload;

#[cfg(test)]
mod tests;

pub use client_config::ClientConfig;
pub use client_config::builder::ClientConfigBuilder;
pub use error::model_error::ModelError;
pub use payload::{Document, HealthStatus, ProcessingResult, Task};

pub use common::ErrorLocation;
