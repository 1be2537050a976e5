//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods. Reads take
//! `&DbPool`; writes take the `&mut SqliteConnection` of a
//! [`UnitOfWork`](crate::UnitOfWork) so the caller decides when to commit.

pub mod artist_repo;
pub mod show_repo;
pub mod venue_repo;

pub use artist_repo::ArtistRepo;
pub use show_repo::ShowRepo;
pub use venue_repo::VenueRepo;
