//! Repository for the `artists` table.

use chrono::Utc;
use gigbook_core::genre::join_genres;
use gigbook_core::search::SearchTerm;
use gigbook_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::artist::{Artist, ArtistFields};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, phone, genres, image_link, facebook_link, \
                       website, seeking_venue, seeking_description, created_at";

/// Provides create, read, update and search operations for artists.
///
/// There is no delete: artist removal is not exposed by the application.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &ArtistFields,
    ) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists
                (name, city, state, phone, genres, image_link, facebook_link, website,
                 seeking_venue, seeking_description, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(join_genres(&input.genres))
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .bind(input.created_at.unwrap_or_else(Utc::now))
            .fetch_one(conn)
            .await
    }

    /// Find an artist by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = ?1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all artists in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists ORDER BY id");
        sqlx::query_as::<_, Artist>(&query).fetch_all(pool).await
    }

    /// List the `limit` most recently created artists, newest first.
    pub async fn list_recent(pool: &DbPool, limit: i64) -> Result<Vec<Artist>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM artists ORDER BY created_at DESC, id DESC LIMIT ?1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Artists whose name, city or state contains `term`, case-insensitively.
    pub async fn search(pool: &DbPool, term: &str) -> Result<Vec<Artist>, sqlx::Error> {
        let term = SearchTerm::new(term);
        let rows = Self::list(pool).await?;
        Ok(rows
            .into_iter()
            .filter(|row| {
                term.matches_any([row.name.as_str(), row.city.as_str(), row.state.as_str()])
            })
            .collect())
    }

    /// Overwrite every editable column of an artist.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: DbId,
        input: &ArtistFields,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET
                name = ?2,
                city = ?3,
                state = ?4,
                phone = ?5,
                genres = ?6,
                image_link = ?7,
                facebook_link = ?8,
                website = ?9,
                seeking_venue = ?10,
                seeking_description = ?11
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(join_genres(&input.genres))
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_optional(conn)
            .await
    }
}
