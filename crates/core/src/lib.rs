//! Domain logic for the booking directory.
//!
//! Everything here is pure: no database, no HTTP. The `db` and `api` crates
//! build on these types and helpers.

pub mod error;
pub mod genre;
pub mod location;
pub mod schedule;
pub mod search;
pub mod types;
pub mod us_state;
