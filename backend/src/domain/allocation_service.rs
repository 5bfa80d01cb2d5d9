use chrono::{Datelike, NaiveDate, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::allocations::{CreateAllocationCommand, UpdateAllocationCommand};
use crate::domain::models::allocation::{Allocation, AllocationError, AllocationQuery, NewAllocation};
use crate::storage::{AllocationStorage, StorageError};
use shared::{MAX_RESOURCE_ID, MAX_YEAR, MIN_RESOURCE_ID, MIN_YEAR};

/// Maximum number of allocations returned by a single listing
pub const LIST_LIMIT: u32 = 1000;

impl From<StorageError> for AllocationError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Duplicate => AllocationError::Conflict,
            StorageError::CorruptRecord { .. } => AllocationError::Internal(err.to_string()),
            StorageError::Database(_) => AllocationError::StoreUnavailable(err.to_string()),
        }
    }
}

/// Service for managing vehicle allocations
#[derive(Clone)]
pub struct AllocationService {
    storage: Arc<dyn AllocationStorage>,
}

impl AllocationService {
    /// Create a new AllocationService
    pub fn new(storage: Arc<dyn AllocationStorage>) -> Self {
        Self { storage }
    }

    /// Create a new allocation.
    ///
    /// The driver is the vehicle's own driver, so `driver_id` mirrors
    /// `vehicle_id`. Double-booking is rejected by the store in the same
    /// statement that performs the insert.
    pub async fn create_allocation(&self, command: CreateAllocationCommand) -> Result<Allocation, AllocationError> {
        info!(
            "Creating allocation: employee_id={}, vehicle_id={}, date={}",
            command.employee_id, command.vehicle_id, command.date
        );

        validate_resource_id("employee_id", command.employee_id)?;
        validate_resource_id("vehicle_id", command.vehicle_id)?;
        validate_date(command.date)?;

        let new_allocation = NewAllocation {
            employee_id: command.employee_id,
            vehicle_id: command.vehicle_id,
            driver_id: command.vehicle_id,
            date: command.date,
        };

        match self.storage.insert_allocation(&new_allocation).await {
            Ok(allocation) => {
                info!("Created allocation with ID: {}", allocation.id);
                Ok(allocation)
            }
            Err(StorageError::Duplicate) => {
                warn!(
                    "Vehicle {} is already allocated on {}",
                    command.vehicle_id, command.date
                );
                Err(AllocationError::Conflict)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Move an allocation to a new date.
    ///
    /// Only the stored date decides whether the allocation is still mutable;
    /// the new date is not checked against today.
    pub async fn update_allocation(
        &self,
        allocation_id: &str,
        command: UpdateAllocationCommand,
    ) -> Result<(), AllocationError> {
        info!("Updating allocation: {} to date {}", allocation_id, command.date);

        validate_date(command.date)?;

        let existing = self.get_mutable_allocation(allocation_id, "Cannot modify past allocations.").await?;

        if !self.storage.update_allocation_date(&existing.id, command.date).await? {
            // Deleted between the lookup and the write
            return Err(AllocationError::NotFound);
        }

        info!("Updated allocation: {}", allocation_id);
        Ok(())
    }

    /// Delete an allocation that is dated today or later
    pub async fn delete_allocation(&self, allocation_id: &str) -> Result<(), AllocationError> {
        info!("Deleting allocation: {}", allocation_id);

        let existing = self.get_mutable_allocation(allocation_id, "Cannot delete past allocations.").await?;

        if !self.storage.delete_allocation(&existing.id).await? {
            return Err(AllocationError::NotFound);
        }

        info!("Deleted allocation: {}", allocation_id);
        Ok(())
    }

    /// List allocations matching the query, at most [`LIST_LIMIT`] of them
    pub async fn list_allocations(&self, query: AllocationQuery) -> Result<Vec<Allocation>, AllocationError> {
        info!("Listing allocations: {:?}", query);

        if let Some(employee_id) = query.employee_id {
            validate_resource_id("employee_id", employee_id)?;
        }
        if let Some(vehicle_id) = query.vehicle_id {
            validate_resource_id("vehicle_id", vehicle_id)?;
        }

        let allocations = self.storage.list_allocations(&query, LIST_LIMIT).await?;

        info!("Found {} allocations", allocations.len());
        Ok(allocations)
    }

    /// Check that the store is reachable
    pub async fn ping(&self) -> Result<(), AllocationError> {
        self.storage.ping().await.map_err(|e| {
            warn!("Database ping failed: {}", e);
            AllocationError::StoreUnavailable(e.to_string())
        })
    }

    async fn get_mutable_allocation(
        &self,
        allocation_id: &str,
        past_message: &str,
    ) -> Result<Allocation, AllocationError> {
        let existing = match self.storage.get_allocation(allocation_id).await? {
            Some(allocation) => allocation,
            None => {
                warn!("Allocation not found: {}", allocation_id);
                return Err(AllocationError::NotFound);
            }
        };

        if existing.is_past(today()) {
            warn!("Allocation {} is dated {} and can no longer change", existing.id, existing.date);
            return Err(AllocationError::InvalidState(past_message.to_string()));
        }

        Ok(existing)
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn validate_resource_id(field: &str, value: i64) -> Result<(), AllocationError> {
    if !(MIN_RESOURCE_ID..=MAX_RESOURCE_ID).contains(&value) {
        return Err(AllocationError::Validation(format!(
            "{}: must be between {} and {}, got {}",
            field, MIN_RESOURCE_ID, MAX_RESOURCE_ID, value
        )));
    }
    Ok(())
}

fn validate_date(date: NaiveDate) -> Result<(), AllocationError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(AllocationError::Validation(format!(
            "date: year must be between {} and {}, got {}",
            MIN_YEAR,
            MAX_YEAR,
            date.year()
        )));
    }
    Ok(())
}
