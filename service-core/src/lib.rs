//! service-core: Shared infrastructure for lingua services.
pub mod config;
pub mod error;
pub mod observability;
