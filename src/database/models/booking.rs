use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::hotel::HotelSummary;
use crate::booking::AcceptedStay;

/// Booking row as stored. Serialized with `hotel`/`user` holding the referenced ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    #[serde(rename = "hotel")]
    pub hotel_id: Uuid,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(hotel_id: Uuid, user_id: Uuid, stay: AcceptedStay) -> Self {
        Self {
            id: Uuid::new_v4(),
            hotel_id,
            user_id,
            check_in_date: stay.check_in,
            check_out_date: stay.check_out,
            created_at: Utc::now(),
        }
    }

    pub fn stay(&self) -> AcceptedStay {
        AcceptedStay {
            check_in: self.check_in_date,
            check_out: self.check_out_date,
        }
    }
}

/// Booking with its hotel populated, as returned by list and fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub id: Uuid,
    pub hotel: HotelSummary,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl BookingDetails {
    pub fn new(booking: &Booking, hotel: HotelSummary) -> Self {
        Self {
            id: booking.id,
            hotel,
            user_id: booking.user_id,
            check_in_date: booking.check_in_date,
            check_out_date: booking.check_out_date,
            created_at: booking.created_at,
        }
    }
}

/// Flat row produced by the bookings/hotels join
#[derive(Debug, FromRow)]
pub(crate) struct BookingDetailsRow {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub user_id: Uuid,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub hotel_name: String,
    pub hotel_province: String,
    pub hotel_tel: Option<String>,
    pub hotel_description: Option<String>,
}

impl From<BookingDetailsRow> for BookingDetails {
    fn from(row: BookingDetailsRow) -> Self {
        Self {
            id: row.id,
            hotel: HotelSummary {
                id: row.hotel_id,
                name: row.hotel_name,
                province: row.hotel_province,
                tel: row.hotel_tel,
                description: row.hotel_description,
            },
            user_id: row.user_id,
            check_in_date: row.check_in_date,
            check_out_date: row.check_out_date,
            created_at: row.created_at,
        }
    }
}
