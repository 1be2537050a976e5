use axum::routing::{get, post};
use axum::Router;

use crate::handlers::venue;
use crate::state::AppState;

/// Venue routes, mounted at `/venues`.
///
/// ```text
/// GET    /                  list grouped by location
/// POST   /search            search by name, city or state
/// GET    /create            blank form
/// POST   /create            create
/// GET    /{id}              detail
/// DELETE /{id}              delete
/// GET    /{id}/edit         prefilled form
/// POST   /{id}/edit         update
/// POST   /{id}/delete       delete (plain HTML form)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(venue::list_venues))
        .route("/search", post(venue::search_venues))
        .route(
            "/create",
            get(venue::create_venue_form).post(venue::create_venue),
        )
        .route("/{id}", get(venue::get_venue).delete(venue::delete_venue))
        .route(
            "/{id}/edit",
            get(venue::edit_venue_form).post(venue::edit_venue),
        )
        .route("/{id}/delete", post(venue::delete_venue))
}
