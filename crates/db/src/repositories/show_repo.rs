//! Repository for the `shows` table.

use gigbook_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::show::{CreateShow, Show, ShowListing, ShowStart};
use crate::DbPool;

const COLUMNS: &str = "id, artist_id, venue_id, start_time";

/// Select list joining a show to its venue and artist.
const LISTING_SELECT: &str = "SELECT s.id, s.start_time,
        v.id AS venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
        a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link
     FROM shows s
     JOIN venues v ON v.id = s.venue_id
     JOIN artists a ON a.id = s.artist_id";

pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show.
    ///
    /// Fails with a foreign key violation if the artist or venue does not exist.
    pub async fn create(conn: &mut SqliteConnection, input: &CreateShow) -> Result<Show, sqlx::Error> {
        let query = format!(
            "INSERT INTO shows (artist_id, venue_id, start_time)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(input.artist_id)
            .bind(input.venue_id)
            .bind(input.start_time)
            .fetch_one(conn)
            .await
    }

    /// Every show with its venue and artist, earliest first.
    pub async fn list_listings(pool: &DbPool) -> Result<Vec<ShowListing>, sqlx::Error> {
        let query = format!("{LISTING_SELECT} ORDER BY s.start_time, s.id");
        sqlx::query_as::<_, ShowListing>(&query).fetch_all(pool).await
    }

    /// Shows held at one venue, earliest first.
    pub async fn listings_for_venue(
        pool: &DbPool,
        venue_id: DbId,
    ) -> Result<Vec<ShowListing>, sqlx::Error> {
        let query = format!("{LISTING_SELECT} WHERE s.venue_id = ?1 ORDER BY s.start_time, s.id");
        sqlx::query_as::<_, ShowListing>(&query)
            .bind(venue_id)
            .fetch_all(pool)
            .await
    }

    /// Shows played by one artist, earliest first.
    pub async fn listings_for_artist(
        pool: &DbPool,
        artist_id: DbId,
    ) -> Result<Vec<ShowListing>, sqlx::Error> {
        let query = format!("{LISTING_SELECT} WHERE s.artist_id = ?1 ORDER BY s.start_time, s.id");
        sqlx::query_as::<_, ShowListing>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }

    /// Start time of every show, keyed by venue.
    pub async fn start_times_by_venue(pool: &DbPool) -> Result<Vec<ShowStart>, sqlx::Error> {
        sqlx::query_as::<_, ShowStart>(
            "SELECT venue_id AS owner_id, start_time FROM shows ORDER BY venue_id, id",
        )
        .fetch_all(pool)
        .await
    }

    /// Start time of every show, keyed by artist.
    pub async fn start_times_by_artist(pool: &DbPool) -> Result<Vec<ShowStart>, sqlx::Error> {
        sqlx::query_as::<_, ShowStart>(
            "SELECT artist_id AS owner_id, start_time FROM shows ORDER BY artist_id, id",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shows")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
