//! Handlers for shows. Shows are listed and created; there is no edit or
//! delete route.

use axum::extract::State;
use axum::response::Response;
use axum::Form;
use gigbook_db::models::show::{CreateShow, Show};
use gigbook_db::repositories::ShowRepo;
use gigbook_db::{DbPool, UnitOfWork};

use crate::aggregate::show_rows;
use crate::error::AppResult;
use crate::flash::{redirect_with, Flash, IncomingFlash};
use crate::forms::{FormFields, ShowForm};
use crate::state::AppState;
use crate::views::{self, Page};

/// GET /shows
pub async fn list_shows(State(state): State<AppState>, flash: IncomingFlash) -> AppResult<Page> {
    let listings = ShowRepo::list_listings(&state.pool).await?;
    Ok(views::shows::show_list_page(&show_rows(listings)).with_flash(flash))
}

/// GET /shows/create
pub async fn create_show_form(flash: IncomingFlash) -> Page {
    views::forms::show_form_page().with_flash(flash)
}

/// POST /shows/create
///
/// An unknown artist or venue id passes form validation and is rejected by
/// the foreign key on insert, which rolls the unit back.
pub async fn create_show(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let failed = || redirect_with(Flash::error("Show was not successfully listed."), "/");

    let input = match ShowForm::from_fields(&FormFields::from(pairs)).validated() {
        Ok(input) => input,
        Err(errors) => {
            tracing::warn!(errors = %errors, "Show form rejected");
            return failed();
        }
    };

    match insert_show(&state.pool, &input).await {
        Ok(show) => {
            tracing::info!(
                show_id = show.id,
                artist_id = show.artist_id,
                venue_id = show.venue_id,
                "Show created"
            );
            redirect_with(Flash::success("Show was successfully listed!"), "/")
        }
        Err(err) => {
            tracing::error!(
                artist_id = input.artist_id,
                venue_id = input.venue_id,
                error = %err,
                "Failed to create show"
            );
            failed()
        }
    }
}

async fn insert_show(pool: &DbPool, input: &CreateShow) -> Result<Show, sqlx::Error> {
    let mut uow = UnitOfWork::begin(pool).await?;
    let result = ShowRepo::create(uow.conn(), input).await;
    uow.finish(result).await
}
