//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain. Handlers here only
//! decode and validate requests, call [`AllocationService`](crate::domain::AllocationService),
//! and translate results and errors into HTTP responses.

pub mod rest;

pub use rest::*;
