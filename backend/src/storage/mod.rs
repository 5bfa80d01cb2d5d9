//! # Storage Module
//!
//! Persistence for allocation records. The domain layer only sees the
//! [`AllocationStorage`] trait; [`DbConnection`] and the repositories behind
//! it are the SQLite implementation.
//!
//! The store is the only place that holds state between requests, and the
//! only synchronization point between concurrent requests: the double-booking
//! rule is a unique index, not an in-process lock.

pub mod connection;
pub mod repositories;
pub mod traits;

pub use connection::DbConnection;
pub use repositories::AllocationRepository;
pub use traits::{AllocationStorage, StorageError};
