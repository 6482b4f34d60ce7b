//! Booking rules: request parsing, the create/update validator, the ownership
//! guard and the listing scope. Nothing here touches the database.

pub mod error;
pub mod guard;
pub mod request;
pub mod scope;
pub mod validator;

pub use error::BookingError;
pub use guard::{authorize, BookingAction};
pub use request::{BookingRequest, StayDates};
pub use scope::BookingScope;
pub use validator::{validate_new_booking, validate_stay_change, AcceptedStay, BookingFacts, BookingPolicy};
