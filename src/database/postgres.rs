use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::booking::{
    validate_new_booking, validate_stay_change, BookingError, BookingFacts, BookingPolicy, BookingScope,
    StayDates,
};
use crate::database::models::booking::BookingDetailsRow;
use crate::database::models::{Booking, BookingDetails, Hotel};
use crate::database::store::BookingStore;
use crate::database::DatabaseManager;
use crate::types::Principal;

const BOOKING_COLUMNS: &str = "id, hotel_id, user_id, check_in_date, check_out_date, created_at";

const DETAILS_SELECT: &str = r#"
    SELECT
        b.id, b.hotel_id, b.user_id, b.check_in_date, b.check_out_date, b.created_at,
        h.name AS hotel_name,
        h.province AS hotel_province,
        h.tel AS hotel_tel,
        h.description AS hotel_description
    FROM bookings b
    JOIN hotels h ON h.id = b.hotel_id
"#;

/// PostgreSQL-backed booking store
#[derive(Clone)]
pub struct PgBookingStore {
    pool: PgPool,
}

impl PgBookingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn find_hotel(&self, id: Uuid) -> Result<Option<Hotel>, BookingError> {
        let hotel = sqlx::query_as::<_, Hotel>(
            "SELECT id, name, address, province, tel, description FROM hotels WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(hotel)
    }

    async fn list_bookings(&self, scope: BookingScope) -> Result<Vec<BookingDetails>, BookingError> {
        let rows = match scope {
            BookingScope::All => {
                sqlx::query_as::<_, BookingDetailsRow>(&format!("{} ORDER BY b.created_at", DETAILS_SELECT))
                    .fetch_all(&self.pool)
                    .await?
            }
            BookingScope::Hotel(hotel_id) => {
                sqlx::query_as::<_, BookingDetailsRow>(&format!(
                    "{} WHERE b.hotel_id = $1 ORDER BY b.created_at",
                    DETAILS_SELECT
                ))
                .bind(hotel_id)
                .fetch_all(&self.pool)
                .await?
            }
            BookingScope::User(user_id) => {
                sqlx::query_as::<_, BookingDetailsRow>(&format!(
                    "{} WHERE b.user_id = $1 ORDER BY b.created_at",
                    DETAILS_SELECT
                ))
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.into_iter().map(BookingDetails::from).collect())
    }

    async fn find_booking(&self, id: Uuid) -> Result<Option<BookingDetails>, BookingError> {
        let row = sqlx::query_as::<_, BookingDetailsRow>(&format!("{} WHERE b.id = $1", DETAILS_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(BookingDetails::from))
    }

    async fn create_booking(
        &self,
        hotel_id: Uuid,
        principal: &Principal,
        stay: &StayDates,
        policy: &BookingPolicy,
    ) -> Result<Booking, BookingError> {
        let mut tx = self.pool.begin().await?;

        // Serializes creates per user until commit so the count below cannot go stale
        sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1, 0))")
            .bind(principal.id.to_string())
            .execute(&mut *tx)
            .await?;

        let hotel_exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM hotels WHERE id = $1)")
            .bind(hotel_id)
            .fetch_one(&mut *tx)
            .await?;

        let existing_bookings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE user_id = $1")
            .bind(principal.id)
            .fetch_one(&mut *tx)
            .await?;

        let facts = BookingFacts {
            hotel_id,
            hotel_exists,
            principal,
            existing_bookings,
        };
        let accepted = validate_new_booking(stay, &facts, policy)?;

        let booking = Booking::new(hotel_id, principal.id, accepted);
        let booking = sqlx::query_as::<_, Booking>(&format!(
            "INSERT INTO bookings ({cols}) VALUES ($1, $2, $3, $4, $5, $6) RETURNING {cols}",
            cols = BOOKING_COLUMNS
        ))
        .bind(booking.id)
        .bind(booking.hotel_id)
        .bind(booking.user_id)
        .bind(booking.check_in_date)
        .bind(booking.check_out_date)
        .bind(booking.created_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            "Created booking {} for user {} at hotel {}",
            booking.id,
            booking.user_id,
            booking.hotel_id
        );
        Ok(booking)
    }

    async fn update_booking(
        &self,
        id: Uuid,
        changes: &StayDates,
        policy: &BookingPolicy,
    ) -> Result<Option<Booking>, BookingError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {} FROM bookings WHERE id = $1 FOR UPDATE",
            BOOKING_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(current) = current else {
            return Ok(None);
        };

        let accepted = validate_stay_change(&current.stay(), changes, policy)?;

        let updated = sqlx::query_as::<_, Booking>(&format!(
            "UPDATE bookings SET check_in_date = $2, check_out_date = $3 WHERE id = $1 RETURNING {}",
            BOOKING_COLUMNS
        ))
        .bind(id)
        .bind(accepted.check_in)
        .bind(accepted.check_out)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    async fn delete_booking(&self, id: Uuid) -> Result<bool, BookingError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<(), BookingError> {
        DatabaseManager::health_check(&self.pool)
            .await
            .map_err(|e| BookingError::Internal(e.to_string()))
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
