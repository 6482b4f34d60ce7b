pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryBookingStore;
pub use postgres::PgBookingStore;
pub use store::BookingStore;
