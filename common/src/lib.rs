//! Shared primitives for the task dashboard workspace.
//!
//! Everything here is dependency-light so that every other crate can use it:
//!
//! - **common** (this crate): error location capture, HTTP status classification
//! - **models**: payload and configuration data
//! - **client-core**: the backend API client and task post-processing
//! - **task-dashboard**: the command-line front-end

pub mod error;
pub mod http_status;


pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
