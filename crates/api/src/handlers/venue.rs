//! Handlers for venues: listing, search, detail, create, edit and delete.
//!
//! Read handlers return [`AppResult`] so missing rows render the 404 page.
//! Mutating handlers always answer with a redirect carrying a flash.

use axum::extract::State;
use axum::response::Response;
use axum::Form;
use chrono::Utc;
use gigbook_core::error::CoreError;
use gigbook_core::types::DbId;
use gigbook_db::models::venue::{Venue, VenueFields};
use gigbook_db::repositories::{ShowRepo, VenueRepo};
use gigbook_db::{DbPool, UnitOfWork};

use crate::aggregate::{venue_detail, venue_search_results, venues_by_location};
use crate::error::{AppError, AppResult};
use crate::extract::EntityId;
use crate::flash::{redirect_with, Flash, IncomingFlash};
use crate::forms::{FormFields, SearchForm, VenueForm};
use crate::state::AppState;
use crate::views::{self, Page};

async fn find_venue(pool: &DbPool, id: DbId) -> AppResult<Venue> {
    VenueRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Venue", id }))
}

/// GET /venues
///
/// Every venue grouped by city and state, with upcoming show counts.
pub async fn list_venues(
    State(state): State<AppState>,
    flash: IncomingFlash,
) -> AppResult<Page> {
    let venues = VenueRepo::list(&state.pool).await?;
    let starts = ShowRepo::start_times_by_venue(&state.pool).await?;
    let areas = venues_by_location(venues, &starts, Utc::now());
    Ok(views::venues::venue_list_page(&areas).with_flash(flash))
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    flash: IncomingFlash,
    Form(form): Form<SearchForm>,
) -> AppResult<Page> {
    let venues = VenueRepo::search(&state.pool, &form.search_term).await?;
    let starts = ShowRepo::start_times_by_venue(&state.pool).await?;
    let results = venue_search_results(venues, &starts, Utc::now());
    tracing::debug!(term = %form.search_term, count = results.count, "Venue search");

    Ok(views::search::search_results_page(
        "Venue search",
        "/venues",
        views::search::venue_search_box(&form.search_term),
        &form.search_term,
        &results,
    )
    .with_flash(flash))
}

/// GET /venues/{id}
pub async fn get_venue(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    flash: IncomingFlash,
) -> AppResult<Page> {
    let venue = find_venue(&state.pool, id).await?;
    let shows = ShowRepo::listings_for_venue(&state.pool, id).await?;
    let detail = venue_detail(venue, shows, Utc::now());
    Ok(views::venues::venue_detail_page(&detail).with_flash(flash))
}

/// GET /venues/create
pub async fn create_venue_form(flash: IncomingFlash) -> Page {
    views::forms::venue_form_page("List a new venue", "/venues/create", &VenueForm::default())
        .with_flash(flash)
}

/// POST /venues/create
///
/// Redirects home either way.
pub async fn create_venue(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let form = VenueForm::from_fields(&FormFields::from(pairs));
    let name = form.name.clone();
    let failed = || {
        redirect_with(
            Flash::error(format!("An error occurred. Venue {name} could not be listed.")),
            "/",
        )
    };

    let input = match form.validated() {
        Ok(input) => input,
        Err(errors) => {
            tracing::warn!(errors = %errors, "Venue form rejected");
            return failed();
        }
    };

    match insert_venue(&state.pool, &input).await {
        Ok(venue) => {
            tracing::info!(venue_id = venue.id, name = %venue.name, "Venue created");
            redirect_with(
                Flash::success(format!("Venue {} was successfully listed!", venue.name)),
                "/",
            )
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to create venue");
            failed()
        }
    }
}

async fn insert_venue(pool: &DbPool, input: &VenueFields) -> Result<Venue, sqlx::Error> {
    let mut uow = UnitOfWork::begin(pool).await?;
    let result = VenueRepo::create(uow.conn(), input).await;
    uow.finish(result).await
}

/// GET /venues/{id}/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    flash: IncomingFlash,
) -> AppResult<Page> {
    let venue = find_venue(&state.pool, id).await?;
    let form = VenueForm::from_venue(&venue);
    Ok(views::forms::venue_form_page(
        &format!("Edit venue {}", venue.name),
        &format!("/venues/{id}/edit"),
        &form,
    )
    .with_flash(flash))
}

/// POST /venues/{id}/edit
///
/// Redirects to the venue page. An id with no venue redirects to the
/// listing instead.
pub async fn edit_venue(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let detail_path = format!("/venues/{id}");
    let failed = |to: &str| redirect_with(Flash::error("Venue was not edited successfully."), to);

    let input = match VenueForm::from_fields(&FormFields::from(pairs)).validated() {
        Ok(input) => input,
        Err(errors) => {
            tracing::warn!(venue_id = id, errors = %errors, "Venue edit rejected");
            return failed(&detail_path);
        }
    };

    match update_venue(&state.pool, id, &input).await {
        Ok(Some(venue)) => {
            tracing::info!(venue_id = id, "Venue updated");
            redirect_with(
                Flash::success(format!("Venue {} edited successfully", venue.name)),
                &detail_path,
            )
        }
        Ok(None) => {
            tracing::warn!(venue_id = id, "Edit of missing venue");
            failed("/venues")
        }
        Err(err) => {
            tracing::error!(venue_id = id, error = %err, "Failed to update venue");
            failed(&detail_path)
        }
    }
}

async fn update_venue(
    pool: &DbPool,
    id: DbId,
    input: &VenueFields,
) -> Result<Option<Venue>, sqlx::Error> {
    let mut uow = UnitOfWork::begin(pool).await?;
    let result = VenueRepo::update(uow.conn(), id, input).await;
    uow.finish(result).await
}

/// DELETE /venues/{id} and POST /venues/{id}/delete
///
/// Removes the venue and its shows, then redirects home.
pub async fn delete_venue(State(state): State<AppState>, EntityId(id): EntityId) -> Response {
    let failed = || redirect_with(Flash::error("Venue was not deleted successfully."), "/");

    match remove_venue(&state.pool, id).await {
        Ok(Some(venue)) => {
            tracing::info!(venue_id = id, "Venue deleted");
            redirect_with(
                Flash::success(format!("Venue {} was deleted successfully!", venue.name)),
                "/",
            )
        }
        Ok(None) => {
            tracing::warn!(venue_id = id, "Delete of missing venue");
            failed()
        }
        Err(err) => {
            tracing::error!(venue_id = id, error = %err, "Failed to delete venue");
            failed()
        }
    }
}

async fn remove_venue(pool: &DbPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
    let mut uow = UnitOfWork::begin(pool).await?;
    let result = VenueRepo::delete(uow.conn(), id).await;
    uow.finish(result).await
}
