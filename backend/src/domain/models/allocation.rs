use chrono::NaiveDate;
use thiserror::Error;

/// Calendar-date layout used on the wire and in storage
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A stored allocation of a vehicle to an employee for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub id: String,
    pub employee_id: i64,
    pub vehicle_id: i64,
    pub driver_id: i64,
    pub date: NaiveDate,
}

impl Allocation {
    /// Past allocations can no longer be modified or deleted
    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.date < today
    }
}

/// An allocation that has not been stored yet and so has no id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAllocation {
    pub employee_id: i64,
    pub vehicle_id: i64,
    pub driver_id: i64,
    pub date: NaiveDate,
}

/// Field filters for listing; `None` means "any value"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationQuery {
    pub employee_id: Option<i64>,
    pub vehicle_id: Option<i64>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Error)]
pub enum AllocationError {
    #[error("{0}")]
    Validation(String),
    #[error("Vehicle already allocated for this date.")]
    Conflict,
    #[error("Allocation not found.")]
    NotFound,
    #[error("{0}")]
    InvalidState(String),
    #[error("Database connection failed: {0}")]
    StoreUnavailable(String),
    /// The store answered but returned data the service cannot use
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_past_is_strict() {
        let today = NaiveDate::from_ymd_opt(2024, 10, 22).unwrap();
        let mut allocation = Allocation {
            id: "a".to_string(),
            employee_id: 1,
            vehicle_id: 1,
            driver_id: 1,
            date: today,
        };
        assert!(!allocation.is_past(today));

        allocation.date = today.pred_opt().unwrap();
        assert!(allocation.is_past(today));

        allocation.date = today.succ_opt().unwrap();
        assert!(!allocation.is_past(today));
    }
}
