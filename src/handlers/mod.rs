//! Route handlers in two tiers.
//! Public (no auth): /, /health
//! Protected (JWT auth): /api/v1/*

pub mod bookings;
pub mod system;
