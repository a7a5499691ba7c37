//! MySQL implementation of the BookingRepository trait.
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE bookings (
//!     id            CHAR(36)     NOT NULL PRIMARY KEY,
//!     name          VARCHAR(255) NOT NULL,
//!     phone         VARCHAR(16)  NOT NULL,
//!     service       VARCHAR(32)  NOT NULL,
//!     location      VARCHAR(255) NOT NULL,
//!     booking_date  DATE         NOT NULL,
//!     time_slot     VARCHAR(16)  NOT NULL,
//!     note          TEXT         NULL,
//!     status        VARCHAR(16)  NOT NULL DEFAULT 'pending',
//!     created_at    TIMESTAMP(6) NOT NULL,
//!     UNIQUE KEY uq_date_slot (booking_date, time_slot)
//! );
//! ```
//!
//! The unique key is a backstop for the same-slot case; the full-day
//! exclusivity rules are enforced by the transactional insert, which
//! locks the day's rows and re-runs the availability check before
//! writing. The losing side of a concurrent race therefore gets the same
//! conflict error the up-front availability check would have produced.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use hf_core::domain::entities::booking::{Booking, BookingStatus};
use hf_core::domain::value_objects::{NormalizedPhone, ServiceCategory, TimeSlot};
use hf_core::errors::DomainError;
use hf_core::repositories::BookingRepository;
use hf_core::services::booking::availability::check_slot;

const SELECT_DAY: &str = r#"
    SELECT id, name, phone, service, location, booking_date,
           time_slot, note, status, created_at
    FROM bookings
    WHERE booking_date = ? AND status != 'cancelled'
"#;

/// MySQL implementation of BookingRepository
pub struct MySqlBookingRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlBookingRepository {
    /// Create a new MySQL booking repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn db_err(e: sqlx::Error) -> DomainError {
        DomainError::Database {
            message: format!("Database query failed: {}", e),
        }
    }

    /// Convert a database row to a Booking entity
    fn row_to_booking(row: &sqlx::mysql::MySqlRow) -> Result<Booking, DomainError> {
        let invalid = |what: &str| DomainError::Database {
            message: format!("Invalid {} in bookings row", what),
        };

        let id: String = row.try_get("id").map_err(Self::db_err)?;
        let phone: String = row.try_get("phone").map_err(Self::db_err)?;
        let service: String = row.try_get("service").map_err(Self::db_err)?;
        let time_slot: String = row.try_get("time_slot").map_err(Self::db_err)?;
        let status: String = row.try_get("status").map_err(Self::db_err)?;

        Ok(Booking {
            id: Uuid::parse_str(&id).map_err(|_| invalid("id"))?,
            name: row.try_get("name").map_err(Self::db_err)?,
            phone: NormalizedPhone::parse(&phone).map_err(|_| invalid("phone"))?,
            service: ServiceCategory::from_db_str(&service).ok_or_else(|| invalid("service"))?,
            location: row.try_get("location").map_err(Self::db_err)?,
            date: row.try_get::<NaiveDate, _>("booking_date").map_err(Self::db_err)?,
            time: TimeSlot::from_db_str(&time_slot).ok_or_else(|| invalid("time_slot"))?,
            note: row.try_get("note").map_err(Self::db_err)?,
            status: BookingStatus::from_db_str(&status).ok_or_else(|| invalid("status"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(Self::db_err)?,
        })
    }
}

#[async_trait]
impl BookingRepository for MySqlBookingRepository {
    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Booking>, DomainError> {
        let rows = sqlx::query(SELECT_DAY)
            .bind(date)
            .fetch_all(&self.pool)
            .await
            .map_err(Self::db_err)?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn insert(&self, booking: Booking) -> Result<Booking, DomainError> {
        let mut tx = self.pool.begin().await.map_err(Self::db_err)?;

        // Lock the day's rows so competing inserts serialize here
        let rows = sqlx::query(&format!("{} FOR UPDATE", SELECT_DAY))
            .bind(booking.date)
            .fetch_all(&mut *tx)
            .await
            .map_err(Self::db_err)?;

        let same_day: Vec<Booking> = rows
            .iter()
            .map(Self::row_to_booking)
            .collect::<Result<_, _>>()?;

        check_slot(booking.date, booking.time, booking.service, &same_day)?;

        sqlx::query(
            r#"
            INSERT INTO bookings
                (id, name, phone, service, location, booking_date,
                 time_slot, note, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(booking.id.to_string())
        .bind(&booking.name)
        .bind(booking.phone.as_str())
        .bind(booking.service.as_db_str())
        .bind(&booking.location)
        .bind(booking.date)
        .bind(booking.time.as_db_str())
        .bind(&booking.note)
        .bind(booking.status.as_db_str())
        .bind(booking.created_at)
        .execute(&mut *tx)
        .await
        .map_err(Self::db_err)?;

        tx.commit().await.map_err(Self::db_err)?;

        tracing::debug!(
            booking_id = %booking.id,
            date = %booking.date,
            slot = %booking.time,
            "Booking row inserted"
        );

        Ok(booking)
    }
}
