//! Show entity model, its input DTO and joined read shapes.

use gigbook_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `shows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: Timestamp,
}

/// DTO for creating a new show.
#[derive(Debug, Clone)]
pub struct CreateShow {
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: Timestamp,
}

/// A show joined with its venue and artist.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowListing {
    pub id: DbId,
    pub start_time: Timestamp,
    pub venue_id: DbId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
}

/// Start time of a show keyed by the venue or artist that owns it.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct ShowStart {
    pub owner_id: DbId,
    pub start_time: Timestamp,
}
