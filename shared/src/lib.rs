//! Request and response types exchanged over the vehicle allocation REST API.
//!
//! Dates travel as `YYYY-MM-DD` strings in both directions; chrono's
//! `NaiveDate` serde support produces and accepts exactly that format.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Smallest accepted employee or vehicle identifier.
pub const MIN_RESOURCE_ID: i64 = 1;
/// Largest accepted employee or vehicle identifier.
pub const MAX_RESOURCE_ID: i64 = 1000;

/// Earliest year a date may carry. chrono also parses signed years such as
/// `+10000-02-01`, which do not fit the `YYYY-MM-DD` format.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// Reject dates whose year falls outside `MIN_YEAR..=MAX_YEAR`
pub fn validate_calendar_date(date: &NaiveDate) -> Result<(), ValidationError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Ok(());
    }
    let mut error = ValidationError::new("calendar_date");
    error.message = Some(Cow::Borrowed("year must be between 1 and 9999"));
    Err(error)
}

/// An allocation as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Store-assigned identifier
    pub id: String,
    pub employee_id: i64,
    pub vehicle_id: i64,
    /// Always equal to `vehicle_id`
    pub driver_id: i64,
    pub date: NaiveDate,
}

/// Body of `POST /allocations/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateAllocationRequest {
    #[validate(range(min = 1, max = 1000, message = "must be between 1 and 1000"))]
    pub employee_id: i64,
    #[validate(range(min = 1, max = 1000, message = "must be between 1 and 1000"))]
    pub vehicle_id: i64,
    #[validate(custom = "validate_calendar_date")]
    pub date: NaiveDate,
}

/// Body of `PUT /allocations/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UpdateAllocationRequest {
    #[validate(custom = "validate_calendar_date")]
    pub date: NaiveDate,
}

/// Query string of `GET /allocations/`.
///
/// Fields left unset impose no constraint on the listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct AllocationFilter {
    #[validate(range(min = 1, max = 1000, message = "must be between 1 and 1000"))]
    pub employee_id: Option<i64>,
    #[validate(range(min = 1, max = 1000, message = "must be between 1 and 1000"))]
    pub vehicle_id: Option<i64>,
    #[validate(custom = "validate_calendar_date")]
    pub date: Option<NaiveDate>,
}

/// Confirmation returned by update and delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of a successful `GET /ping-db`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PingResponse {
    pub status: String,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_create_request_accepts_bounds() {
        for id in [MIN_RESOURCE_ID, MAX_RESOURCE_ID] {
            let request = CreateAllocationRequest {
                employee_id: id,
                vehicle_id: id,
                date: date("2024-10-22"),
            };
            assert!(request.validate().is_ok(), "id {} should be accepted", id);
        }
    }

    #[test]
    fn test_create_request_rejects_out_of_range_ids() {
        let request = CreateAllocationRequest {
            employee_id: 0,
            vehicle_id: 1001,
            date: date("2024-10-22"),
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("employee_id"));
        assert!(fields.contains_key("vehicle_id"));
    }

    #[test]
    fn test_filter_validation_ignores_unset_fields() {
        assert!(AllocationFilter::default().validate().is_ok());

        let filter = AllocationFilter {
            employee_id: Some(5000),
            ..Default::default()
        };
        assert!(filter.validate().is_err());
    }

    #[test]
    fn test_dates_use_iso_calendar_format() {
        let json = r#"{"employee_id": 101, "vehicle_id": 10, "date": "2024-10-22"}"#;
        let request: CreateAllocationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.date, date("2024-10-22"));

        let allocation = Allocation {
            id: "abc".to_string(),
            employee_id: 101,
            vehicle_id: 10,
            driver_id: 10,
            date: date("2024-10-22"),
        };
        let value = serde_json::to_value(&allocation).unwrap();
        assert_eq!(value["date"], "2024-10-22");
    }

    #[test]
    fn test_rejects_timestamps_as_dates() {
        let json = r#"{"date": "2024-10-22T10:00:00Z"}"#;
        assert!(serde_json::from_str::<UpdateAllocationRequest>(json).is_err());
    }

    #[test]
    fn test_rejects_years_beyond_four_digits() {
        let json = r#"{"employee_id": 1, "vehicle_id": 1, "date": "+10000-02-01"}"#;
        let request: CreateAllocationRequest = serde_json::from_str(json).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("date"));

        let update: UpdateAllocationRequest = serde_json::from_str(r#"{"date": "+10000-02-01"}"#).unwrap();
        assert!(update.validate().is_err());

        let filter = AllocationFilter {
            date: NaiveDate::from_ymd_opt(0, 12, 31),
            ..Default::default()
        };
        assert!(filter.validate().is_err());

        let last = UpdateAllocationRequest {
            date: date("9999-12-31"),
        };
        assert!(last.validate().is_ok());
    }
}
