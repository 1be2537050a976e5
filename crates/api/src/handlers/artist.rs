//! Handlers for artists: listing, search, detail, create and edit. There is
//! no artist delete route.

use axum::extract::State;
use axum::response::Response;
use axum::Form;
use chrono::Utc;
use gigbook_core::error::CoreError;
use gigbook_core::types::DbId;
use gigbook_db::models::artist::{Artist, ArtistFields};
use gigbook_db::repositories::{ArtistRepo, ShowRepo};
use gigbook_db::{DbPool, UnitOfWork};

use crate::aggregate::{artist_detail, artist_search_results};
use crate::error::{AppError, AppResult};
use crate::extract::EntityId;
use crate::flash::{redirect_with, Flash, IncomingFlash};
use crate::forms::{ArtistForm, FormFields, SearchForm};
use crate::state::AppState;
use crate::views::{self, Page};

async fn find_artist(pool: &DbPool, id: DbId) -> AppResult<Artist> {
    ArtistRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Artist", id }))
}

/// GET /artists
pub async fn list_artists(
    State(state): State<AppState>,
    flash: IncomingFlash,
) -> AppResult<Page> {
    let artists = ArtistRepo::list(&state.pool).await?;
    Ok(views::artists::artist_list_page(&artists).with_flash(flash))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    flash: IncomingFlash,
    Form(form): Form<SearchForm>,
) -> AppResult<Page> {
    let artists = ArtistRepo::search(&state.pool, &form.search_term).await?;
    let starts = ShowRepo::start_times_by_artist(&state.pool).await?;
    let results = artist_search_results(artists, &starts, Utc::now());
    tracing::debug!(term = %form.search_term, count = results.count, "Artist search");

    Ok(views::search::search_results_page(
        "Artist search",
        "/artists",
        views::search::artist_search_box(&form.search_term),
        &form.search_term,
        &results,
    )
    .with_flash(flash))
}

/// GET /artists/{id}
pub async fn get_artist(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    flash: IncomingFlash,
) -> AppResult<Page> {
    let artist = find_artist(&state.pool, id).await?;
    let shows = ShowRepo::listings_for_artist(&state.pool, id).await?;
    let detail = artist_detail(artist, shows, Utc::now());
    Ok(views::artists::artist_detail_page(&detail).with_flash(flash))
}

/// GET /artists/create
pub async fn create_artist_form(flash: IncomingFlash) -> Page {
    views::forms::artist_form_page(
        "List a new artist",
        "/artists/create",
        &ArtistForm::default(),
    )
    .with_flash(flash)
}

/// POST /artists/create
pub async fn create_artist(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let failed = || redirect_with(Flash::error("Artist was not successfully listed."), "/");

    let input = match ArtistForm::from_fields(&FormFields::from(pairs)).validated() {
        Ok(input) => input,
        Err(errors) => {
            tracing::warn!(errors = %errors, "Artist form rejected");
            return failed();
        }
    };

    match insert_artist(&state.pool, &input).await {
        Ok(artist) => {
            tracing::info!(artist_id = artist.id, name = %artist.name, "Artist created");
            redirect_with(
                Flash::success(format!("Artist {} was successfully listed!", artist.name)),
                "/",
            )
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to create artist");
            failed()
        }
    }
}

async fn insert_artist(pool: &DbPool, input: &ArtistFields) -> Result<Artist, sqlx::Error> {
    let mut uow = UnitOfWork::begin(pool).await?;
    let result = ArtistRepo::create(uow.conn(), input).await;
    uow.finish(result).await
}

/// GET /artists/{id}/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    flash: IncomingFlash,
) -> AppResult<Page> {
    let artist = find_artist(&state.pool, id).await?;
    Ok(views::forms::artist_form_page(
        &format!("Edit artist {}", artist.name),
        &format!("/artists/{id}/edit"),
        &ArtistForm::from_artist(&artist),
    )
    .with_flash(flash))
}

/// POST /artists/{id}/edit
pub async fn edit_artist(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let detail_path = format!("/artists/{id}");
    let failed = |to: &str| redirect_with(Flash::error("Artist was not edited successfully."), to);

    let input = match ArtistForm::from_fields(&FormFields::from(pairs)).validated() {
        Ok(input) => input,
        Err(errors) => {
            tracing::warn!(artist_id = id, errors = %errors, "Artist edit rejected");
            return failed(&detail_path);
        }
    };

    match update_artist(&state.pool, id, &input).await {
        Ok(Some(artist)) => {
            tracing::info!(artist_id = id, "Artist updated");
            redirect_with(
                Flash::success(format!("Artist {} was successfully edited!", artist.name)),
                &detail_path,
            )
        }
        Ok(None) => {
            tracing::warn!(artist_id = id, "Edit of missing artist");
            failed("/artists")
        }
        Err(err) => {
            tracing::error!(artist_id = id, error = %err, "Failed to update artist");
            failed(&detail_path)
        }
    }
}

async fn update_artist(
    pool: &DbPool,
    id: DbId,
    input: &ArtistFields,
) -> Result<Option<Artist>, sqlx::Error> {
    let mut uow = UnitOfWork::begin(pool).await?;
    let result = ArtistRepo::update(uow.conn(), id, input).await;
    uow.finish(result).await
}
