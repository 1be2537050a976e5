pub mod artist;
pub mod health;
pub mod show;
pub mod venue;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the page route tree.
///
/// ```text
/// /                                   home
///
/// /venues                             list, search, create
/// /venues/{id}                        detail, delete
/// /venues/{id}/edit                   edit form, update
/// /venues/{id}/delete                 delete (form post)
///
/// /artists                            list, search, create
/// /artists/{id}                       detail
/// /artists/{id}/edit                  edit form, update
///
/// /shows                              list, create
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::index))
        .nest("/venues", venue::router())
        .nest("/artists", artist::router())
        .nest("/shows", show::router())
}
