use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::BookingError;
use super::request::StayDates;
use crate::types::{Principal, Role};

/// Business limits applied to every booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingPolicy {
    /// Longest stay allowed, measured as check-out minus check-in
    pub max_stay_days: i64,
    /// Bookings a non-admin user may hold at once
    pub max_bookings_per_user: i64,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            max_stay_days: 3,
            max_bookings_per_user: 3,
        }
    }
}

/// State read from the store that the create checks depend on
#[derive(Debug, Clone, Copy)]
pub struct BookingFacts<'a> {
    pub hotel_id: Uuid,
    pub hotel_exists: bool,
    pub principal: &'a Principal,
    /// Bookings the principal currently holds
    pub existing_bookings: i64,
}

/// A stay that passed every check. Both dates are known and ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptedStay {
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
}

impl AcceptedStay {
    pub fn length(&self) -> Duration {
        self.check_out - self.check_in
    }
}

/// Run the create checks in order, stopping at the first failure.
///
/// 1. hotel exists
/// 2. both dates present
/// 3. check-out after check-in
/// 4. stay no longer than the policy allows (admins included)
/// 5. non-admins below the per-user booking limit
pub fn validate_new_booking(
    stay: &StayDates,
    facts: &BookingFacts<'_>,
    policy: &BookingPolicy,
) -> Result<AcceptedStay, BookingError> {
    if !facts.hotel_exists {
        return Err(BookingError::hotel_not_found(facts.hotel_id));
    }

    let (check_in, check_out) = match (stay.check_in, stay.check_out) {
        (Some(check_in), Some(check_out)) => (check_in, check_out),
        _ => {
            return Err(BookingError::invalid_input(
                "Check-in and Check-out dates are required",
            ))
        }
    };

    let accepted = validate_range(check_in, check_out, policy)?;

    match facts.principal.role {
        Role::Admin => {}
        Role::User => {
            if facts.existing_bookings >= policy.max_bookings_per_user {
                return Err(BookingError::policy_violation(format!(
                    "The user with ID {} has already made {} bookings",
                    facts.principal.id, policy.max_bookings_per_user
                )));
            }
        }
    }

    Ok(accepted)
}

/// Merge a partial date change onto the current stay and re-check ordering and length.
/// The booking count is not re-checked: an update never adds a booking.
pub fn validate_stay_change(
    current: &AcceptedStay,
    changes: &StayDates,
    policy: &BookingPolicy,
) -> Result<AcceptedStay, BookingError> {
    let check_in = changes.check_in.unwrap_or(current.check_in);
    let check_out = changes.check_out.unwrap_or(current.check_out);
    validate_range(check_in, check_out, policy)
}

fn validate_range(
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
    policy: &BookingPolicy,
) -> Result<AcceptedStay, BookingError> {
    if check_out <= check_in {
        return Err(BookingError::invalid_input(
            "Check-out date must be later than check-in date",
        ));
    }

    let stay = AcceptedStay { check_in, check_out };
    if stay.length() > Duration::days(policy.max_stay_days) {
        return Err(BookingError::policy_violation(format!(
            "Bookings can only be made for up to {} nights.",
            policy.max_stay_days
        )));
    }

    Ok(stay)
}
