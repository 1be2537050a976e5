use axum::routing::get;
use axum::Router;

use crate::handlers::show;
use crate::state::AppState;

/// Show routes, mounted at `/shows`.
///
/// ```text
/// GET    /                  list
/// GET    /create            blank form
/// POST   /create            create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(show::list_shows))
        .route("/create", get(show::create_show_form).post(show::create_show))
}
