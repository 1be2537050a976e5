use axum::extract::State;
use gigbook_db::repositories::{ArtistRepo, VenueRepo};

use crate::error::AppResult;
use crate::flash::IncomingFlash;
use crate::state::AppState;
use crate::views::{self, Page};

/// GET /
///
/// The most recently listed venues and artists, newest first.
pub async fn index(State(state): State<AppState>, flash: IncomingFlash) -> AppResult<Page> {
    let limit = state.config.home_recent_limit;
    let venues = VenueRepo::list_recent(&state.pool, limit).await?;
    let artists = ArtistRepo::list_recent(&state.pool, limit).await?;
    Ok(views::home::home_page(&venues, &artists).with_flash(flash))
}
