//! # Domain Module
//!
//! Business rules for vehicle allocations, independent of HTTP and of the
//! storage backend.
//!
//! ## Business Rules
//!
//! - Employee and vehicle ids lie in 1..=1000
//! - A vehicle is booked at most once per date
//! - The driver of an allocation is the vehicle's own driver (`driver_id == vehicle_id`)
//! - Allocations dated before today (UTC) can be neither moved nor deleted
//! - Dates carry a year in 1..=9999
//! - Listings are capped at 1000 allocations

pub mod allocation_service;
pub mod commands;
pub mod models;

pub use allocation_service::*;
pub use models::allocation::{Allocation, AllocationError};
