use sqlx::AnyPool;
use thiserror::Error;

use crate::db::schema::{self, Column};
use crate::models::CafeRecord;

/// Errors surfaced by [`CafeStore`]
#[derive(Error, Debug)]
pub enum StoreError {
    /// An insert collided with an existing `cafe_name` or `location`.
    /// `column` is `None` when the driver message does not say which.
    #[error("Duplicate value for unique column {}", .column.map(Column::as_str).unwrap_or("cafe_name/location"))]
    ConstraintViolation { column: Option<Column> },

    #[error("Store unavailable: {0}")]
    Connection(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                let detail = format!(
                    "{} {}",
                    db_err.constraint().unwrap_or_default(),
                    db_err.message()
                );
                let column = Column::unique().find(|c| detail.contains(c.as_str()));
                return StoreError::ConstraintViolation { column };
            }
        }
        StoreError::Connection(err)
    }
}

/// Persistence gateway for café rows
///
/// Holds the shared pool; every write acquires a connection inside its own
/// transaction, which is committed on success and rolled back on drop.
#[derive(Clone)]
pub struct CafeStore {
    pool: AnyPool,
}

impl CafeStore {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    /// Create the café table if it does not exist yet
    pub async fn ensure_table(&self) -> Result<(), StoreError> {
        sqlx::query(&schema::create_table_sql())
            .execute(&self.pool)
            .await?;

        tracing::info!("Cafe table ready");
        Ok(())
    }

    /// Round-trip a trivial query to check connectivity
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn insert(&self, record: &CafeRecord) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        let sql = schema::insert_sql();
        let result = sqlx::query(&sql)
            .bind(record.cafe_name.as_str())
            .bind(record.location.as_str())
            .bind(record.open_time.as_str())
            .bind(record.close_time.as_str())
            .bind(record.coffee_rating.as_str())
            .bind(record.wifi_rating.as_str())
            .bind(record.power_rating.as_str())
            .execute(&mut *tx)
            .await;

        match result.map_err(StoreError::from) {
            Ok(_) => {}
            Err(StoreError::ConstraintViolation { column }) => {
                tracing::info!("Rejected duplicate cafe '{}'", record.cafe_name);
                return Err(StoreError::ConstraintViolation { column });
            }
            Err(e) => {
                tracing::error!("Cafe insert failed: {}", e);
                return Err(e);
            }
        }

        tx.commit().await?;

        tracing::info!("Cafe '{}' added", record.cafe_name);
        Ok(())
    }

    pub async fn list_all(&self) -> Result<Vec<CafeRecord>, StoreError> {
        let sql = schema::select_all_sql();
        let cafes = sqlx::query_as::<_, CafeRecord>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Cafe listing failed: {}", e);
                StoreError::from(e)
            })?;

        Ok(cafes)
    }

    /// Delete every row named `name`; returns the number of rows removed.
    /// Zero matches is not an error.
    pub async fn delete_by_name(&self, name: &str) -> Result<u64, StoreError> {
        let mut tx = self.pool.begin().await?;

        let sql = schema::delete_where_sql(Column::CafeName);
        let removed = sqlx::query(&sql)
            .bind(name)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        if removed == 0 {
            tracing::info!("No cafe named '{}' to delete", name);
        } else {
            tracing::info!("Cafe '{}' deleted", name);
        }

        Ok(removed)
    }
}
