use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Hotel row. Bookings only need to know a hotel exists and how to label it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Hotel {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub tel: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Hotel fields embedded in booking responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelSummary {
    pub id: Uuid,
    pub name: String,
    pub province: String,
    pub tel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Hotel> for HotelSummary {
    fn from(hotel: &Hotel) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name.clone(),
            province: hotel.province.clone(),
            tel: hotel.tel.clone(),
            description: hotel.description.clone(),
        }
    }
}
