//! Domain-level command and query types.
//!
//! These are used by services inside the domain layer and are not exposed over
//! the public API. The REST layer maps the DTOs from the `shared` crate to
//! these types.

pub mod allocations {
    use chrono::NaiveDate;

    /// Input for creating a new allocation.
    #[derive(Debug, Clone)]
    pub struct CreateAllocationCommand {
        pub employee_id: i64,
        pub vehicle_id: i64,
        pub date: NaiveDate,
    }

    /// Input for moving an allocation to another date.
    #[derive(Debug, Clone)]
    pub struct UpdateAllocationCommand {
        pub date: NaiveDate,
    }
}
