//! Booking routes, one file per route. Mounted under /api/v1 behind the JWT middleware.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;
mod utils;

pub use create::booking_create;
pub use delete::booking_delete;
pub use get::booking_get;
pub use list::{bookings_list, hotel_bookings_list};
pub use update::booking_update;
