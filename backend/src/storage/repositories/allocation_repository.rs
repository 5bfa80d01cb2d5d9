use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite};
use tracing::debug;

use crate::domain::models::allocation::{Allocation, AllocationQuery, NewAllocation, DATE_FORMAT};
use crate::storage::connection::DbConnection;
use crate::storage::traits::{AllocationStorage, StorageError};

/// SQLite-backed repository for allocation records
#[derive(Clone)]
pub struct AllocationRepository {
    db: DbConnection,
}

impl AllocationRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_allocation(row: &SqliteRow) -> Result<Allocation, StorageError> {
        let id: String = row.try_get("id")?;
        let raw_date: String = row.try_get("date")?;
        let date = NaiveDate::parse_from_str(&raw_date, DATE_FORMAT).map_err(|e| {
            StorageError::CorruptRecord {
                id: id.clone(),
                reason: format!("invalid date '{}': {}", raw_date, e),
            }
        })?;

        Ok(Allocation {
            id,
            employee_id: row.try_get("employee_id")?,
            vehicle_id: row.try_get("vehicle_id")?,
            driver_id: row.try_get("driver_id")?,
            date,
        })
    }
}

/// Turn a unique-index violation into `Duplicate`, pass everything else through
fn map_write_error(err: sqlx::Error) -> StorageError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => StorageError::Duplicate,
        _ => StorageError::Database(err),
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[async_trait]
impl AllocationStorage for AllocationRepository {
    async fn insert_allocation(&self, allocation: &NewAllocation) -> Result<Allocation, StorageError> {
        let row = sqlx::query(
            r#"
            INSERT INTO allocations (employee_id, vehicle_id, driver_id, date)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(allocation.employee_id)
        .bind(allocation.vehicle_id)
        .bind(allocation.driver_id)
        .bind(format_date(allocation.date))
        .fetch_one(self.db.pool())
        .await
        .map_err(map_write_error)?;

        let id: String = row.try_get("id")?;
        debug!("Inserted allocation {}", id);

        Ok(Allocation {
            id,
            employee_id: allocation.employee_id,
            vehicle_id: allocation.vehicle_id,
            driver_id: allocation.driver_id,
            date: allocation.date,
        })
    }

    async fn get_allocation(&self, allocation_id: &str) -> Result<Option<Allocation>, StorageError> {
        let row = sqlx::query(
            r#"
            SELECT id, employee_id, vehicle_id, driver_id, date
            FROM allocations
            WHERE id = ?
            "#,
        )
        .bind(allocation_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::row_to_allocation).transpose()
    }

    async fn update_allocation_date(&self, allocation_id: &str, date: NaiveDate) -> Result<bool, StorageError> {
        let result = sqlx::query(
            r#"
            UPDATE allocations
            SET date = ?
            WHERE id = ?
            "#,
        )
        .bind(format_date(date))
        .bind(allocation_id)
        .execute(self.db.pool())
        .await
        .map_err(map_write_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_allocation(&self, allocation_id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM allocations WHERE id = ?")
            .bind(allocation_id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_allocations(&self, query: &AllocationQuery, limit: u32) -> Result<Vec<Allocation>, StorageError> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT id, employee_id, vehicle_id, driver_id, date FROM allocations WHERE 1 = 1",
        );

        if let Some(employee_id) = query.employee_id {
            builder.push(" AND employee_id = ").push_bind(employee_id);
        }
        if let Some(vehicle_id) = query.vehicle_id {
            builder.push(" AND vehicle_id = ").push_bind(vehicle_id);
        }
        if let Some(date) = query.date {
            builder.push(" AND date = ").push_bind(format_date(date));
        }
        builder.push(" LIMIT ").push_bind(i64::from(limit));

        let rows = builder.build().fetch_all(self.db.pool()).await?;

        rows.iter().map(Self::row_to_allocation).collect()
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.db.ping().await?;
        Ok(())
    }
}
