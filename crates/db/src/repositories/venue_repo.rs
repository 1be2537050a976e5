//! Repository for the `venues` table.

use chrono::Utc;
use gigbook_core::genre::join_genres;
use gigbook_core::search::SearchTerm;
use gigbook_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::venue::{Venue, VenueFields};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, address, phone, genres, image_link, \
                       facebook_link, website, seeking_talent, seeking_description, created_at";

/// Provides CRUD and search operations for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    ///
    /// `created_at` defaults to the current time if the input leaves it unset.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &VenueFields,
    ) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues
                (name, city, state, address, phone, genres, image_link, facebook_link,
                 website, seeking_talent, seeking_description, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(join_genres(&input.genres))
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .bind(input.created_at.unwrap_or_else(Utc::now))
            .fetch_one(conn)
            .await
    }

    /// Find a venue by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = ?1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all venues in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues ORDER BY id");
        sqlx::query_as::<_, Venue>(&query).fetch_all(pool).await
    }

    /// List the `limit` most recently created venues, newest first.
    pub async fn list_recent(pool: &DbPool, limit: i64) -> Result<Vec<Venue>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM venues ORDER BY created_at DESC, id DESC LIMIT ?1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Venues whose name, city or state contains `term`, case-insensitively.
    ///
    /// An empty term matches every venue.
    pub async fn search(pool: &DbPool, term: &str) -> Result<Vec<Venue>, sqlx::Error> {
        let term = SearchTerm::new(term);
        let rows = Self::list(pool).await?;
        Ok(rows
            .into_iter()
            .filter(|row| {
                term.matches_any([row.name.as_str(), row.city.as_str(), row.state.as_str()])
            })
            .collect())
    }

    /// Overwrite every editable column of a venue.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: DbId,
        input: &VenueFields,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET
                name = ?2,
                city = ?3,
                state = ?4,
                address = ?5,
                phone = ?6,
                genres = ?7,
                image_link = ?8,
                facebook_link = ?9,
                website = ?10,
                seeking_talent = ?11,
                seeking_description = ?12
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(join_genres(&input.genres))
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_optional(conn)
            .await
    }

    /// Delete a venue and, through the foreign key cascade, its shows.
    ///
    /// Returns the deleted row, or `None` if it did not exist.
    pub async fn delete(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("DELETE FROM venues WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }
}
