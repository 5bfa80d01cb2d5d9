//! # Storage Traits
//!
//! The persistence gateway seen by the domain layer. The SQLite repository is
//! the production implementation; anything else that honours these contracts
//! can be swapped in.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::models::allocation::{Allocation, AllocationQuery, NewAllocation};

#[derive(Debug, Error)]
pub enum StorageError {
    /// A write would give a vehicle two allocations on the same date
    #[error("an allocation for this vehicle and date already exists")]
    Duplicate,

    /// A stored row could not be turned back into an allocation
    #[error("corrupt allocation record {id}: {reason}")]
    CorruptRecord { id: String, reason: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Trait defining the interface for allocation storage operations
#[async_trait]
pub trait AllocationStorage: Send + Sync {
    /// Insert a new allocation and return it with its store-assigned id.
    ///
    /// Fails with `StorageError::Duplicate` when the vehicle is already
    /// allocated on that date. The check and the write are one statement.
    async fn insert_allocation(&self, allocation: &NewAllocation) -> Result<Allocation, StorageError>;

    /// Retrieve a specific allocation by ID
    async fn get_allocation(&self, allocation_id: &str) -> Result<Option<Allocation>, StorageError>;

    /// Overwrite the date of an allocation.
    /// Returns true if the allocation was found and updated, false otherwise
    async fn update_allocation_date(&self, allocation_id: &str, date: NaiveDate) -> Result<bool, StorageError>;

    /// Delete a single allocation.
    /// Returns true if the allocation was found and deleted, false otherwise
    async fn delete_allocation(&self, allocation_id: &str) -> Result<bool, StorageError>;

    /// List allocations matching every field set on the query, in storage order
    async fn list_allocations(&self, query: &AllocationQuery, limit: u32) -> Result<Vec<Allocation>, StorageError>;

    /// Check that the underlying store is reachable
    async fn ping(&self) -> Result<(), StorageError>;
}
