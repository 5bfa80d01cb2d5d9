//! # REST API Interface Layer
//!
//! - `allocation_apis`: create, update, delete and list allocations
//! - `health_apis`: database connectivity check
//! - `extract`: JSON and query extractors that also run field validation
//! - `error`: translation of domain and extractor errors into HTTP responses
//! - `mappers`: conversion between `shared` DTOs and domain types

pub mod allocation_apis;
pub mod error;
pub mod extract;
pub mod health_apis;
pub mod mappers;

pub use error::ApiError;
