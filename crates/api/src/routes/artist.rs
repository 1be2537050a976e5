use axum::routing::{get, post};
use axum::Router;

use crate::handlers::artist;
use crate::state::AppState;

/// Artist routes, mounted at `/artists`.
///
/// ```text
/// GET    /                  list
/// POST   /search            search by name, city or state
/// GET    /create            blank form
/// POST   /create            create
/// GET    /{id}              detail
/// GET    /{id}/edit         prefilled form
/// POST   /{id}/edit         update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(artist::list_artists))
        .route("/search", post(artist::search_artists))
        .route(
            "/create",
            get(artist::create_artist_form).post(artist::create_artist),
        )
        .route("/{id}", get(artist::get_artist))
        .route(
            "/{id}/edit",
            get(artist::edit_artist_form).post(artist::edit_artist),
        )
}
