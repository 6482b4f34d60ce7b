pub mod booking;
pub mod hotel;

pub use booking::{Booking, BookingDetails};
pub use hotel::{Hotel, HotelSummary};
