//! HTTP-level tests for the venue pages and mutations.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{
    body_text, create_artist, create_show, create_venue, delete, flash_cookie, flash_of, get,
    get_with_cookie, location, post_form, show_count, venue_form,
};
use gigbook_api::flash::FlashLevel;
use gigbook_db::repositories::VenueRepo;
use sqlx::SqlitePool;

fn start_in(offset: Duration) -> String {
    (Utc::now() + offset).format("%Y-%m-%d %H:%M:%S").to_string()
}

// ---------------------------------------------------------------------------
// Create and detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_venue_redirects_home_with_success_flash(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/venues/create",
        &venue_form("The Musical Hop", "San Francisco", "CA"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    let flash = flash_of(&response);
    assert_eq!(flash.level, FlashLevel::Success);
    assert_eq!(flash.message, "Venue The Musical Hop was successfully listed!");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn created_venue_detail_shows_submitted_fields_and_no_shows(pool: SqlitePool) {
    let id = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;

    let response = get(common::build_test_app(pool), &format!("/venues/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("The Musical Hop"));
    assert!(html.contains("1015 Folsom Street"));
    assert!(html.contains("San Francisco, CA"));
    assert!(html.contains("123-123-1234"));
    assert!(html.contains(r#"<span class="genre">Jazz</span>"#));
    assert!(html.contains(r#"<span class="genre">Reggae</span>"#));
    assert!(html.contains("https://www.themusicalhop.com"));
    assert!(html.contains("We are on the lookout for a local artist"));
    assert!(html.contains("0 Upcoming Shows"));
    assert!(html.contains("0 Past Shows"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn flash_is_shown_once_on_the_next_page(pool: SqlitePool) {
    let response = post_form(
        common::build_test_app(pool.clone()),
        "/venues/create",
        &venue_form("The Musical Hop", "San Francisco", "CA"),
    )
    .await;
    let cookie = flash_cookie(&response);

    let home = get_with_cookie(common::build_test_app(pool.clone()), "/", &cookie).await;
    assert_eq!(home.status(), StatusCode::OK);
    let cleared = home
        .headers()
        .get("set-cookie")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cleared.contains("Max-Age=0"));
    let html = body_text(home).await;
    assert!(html.contains("Venue The Musical Hop was successfully listed!"));
    assert!(html.contains(r#"href="/venues/1""#));

    let again = get(common::build_test_app(pool), "/").await;
    assert!(!body_text(again).await.contains("successfully listed"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_venue_form_persists_nothing(pool: SqlitePool) {
    let mut fields = venue_form("Nowhere Hall", "Nowhere", "ZZ");
    fields.retain(|(k, _)| *k != "genres");
    let response = post_form(common::build_test_app(pool.clone()), "/venues/create", &fields).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let flash = flash_of(&response);
    assert_eq!(flash.level, FlashLevel::Error);
    assert_eq!(
        flash.message,
        "An error occurred. Venue Nowhere Hall could not be listed."
    );
    assert!(VenueRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn script_link_is_rejected_and_never_rendered(pool: SqlitePool) {
    let mut fields = venue_form("The Musical Hop", "San Francisco", "CA");
    fields.retain(|(k, _)| *k != "website_link");
    fields.push(("website_link", "javascript:alert(document.domain)"));
    let response = post_form(common::build_test_app(pool.clone()), "/venues/create", &fields).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let flash = flash_of(&response);
    assert_eq!(flash.level, FlashLevel::Error);
    assert_eq!(
        flash.message,
        "An error occurred. Venue The Musical Hop could not be listed."
    );
    assert!(VenueRepo::list(&pool).await.unwrap().is_empty());

    let id = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let mut edit = venue_form("The Musical Hop", "San Francisco", "CA");
    edit.retain(|(k, _)| *k != "image_link");
    edit.push(("image_link", "javascript:alert(1)"));
    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/venues/{id}/edit"),
        &edit,
    )
    .await;
    assert_eq!(flash_of(&response).message, "Venue was not edited successfully.");

    let html = body_text(get(common::build_test_app(pool), &format!("/venues/{id}")).await).await;
    assert!(!html.contains("javascript:"));
    assert!(html.contains(r#"href="https://www.themusicalhop.com""#));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_venue_renders_404_page(pool: SqlitePool) {
    let response = get(common::build_test_app(pool), "/venues/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Not Found"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_venue_id_renders_404_page(pool: SqlitePool) {
    let response = get(common::build_test_app(pool), "/venues/not-a-number").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Not Found"));
}

// ---------------------------------------------------------------------------
// Listing and search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn venue_list_groups_by_location_with_upcoming_counts(pool: SqlitePool) {
    let hop = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    create_venue(&pool, "The Dueling Pianos Bar", "New York", "NY").await;
    create_venue(&pool, "Park Square Live Music & Coffee", "San Francisco", "CA").await;
    let artist = create_artist(&pool, "Guns N Petals").await;
    create_show(&pool, artist, hop, &start_in(Duration::days(7))).await;
    create_show(&pool, artist, hop, &start_in(-Duration::days(7))).await;

    let html = body_text(get(common::build_test_app(pool), "/venues").await).await;

    let sf = html.find("<h3>San Francisco, CA</h3>").unwrap();
    let ny = html.find("<h3>New York, NY</h3>").unwrap();
    assert!(sf < ny);
    assert_eq!(html.matches("<h3>San Francisco, CA</h3>").count(), 1);
    assert!(html.contains(r#"The Musical Hop</a> <small>1 upcoming</small>"#));
    assert!(html.contains("Park Square Live Music &amp; Coffee</a> <small>0 upcoming</small>"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn search_is_case_insensitive_substring(pool: SqlitePool) {
    create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    create_venue(&pool, "The Dueling Pianos Bar", "New York", "NY").await;

    let response = post_form(
        common::build_test_app(pool.clone()),
        "/venues/search",
        &[("search_term", "Hop")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"Number of search results for "Hop": 1"#));
    assert!(html.contains("The Musical Hop"));
    assert!(!html.contains("The Dueling Pianos Bar"));

    let html = body_text(
        post_form(
            common::build_test_app(pool),
            "/venues/search",
            &[("search_term", "new york")],
        )
        .await,
    )
    .await;
    assert!(html.contains("The Dueling Pianos Bar"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_search_returns_every_venue(pool: SqlitePool) {
    create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    create_venue(&pool, "The Dueling Pianos Bar", "New York", "NY").await;

    let html = body_text(
        post_form(
            common::build_test_app(pool),
            "/venues/search",
            &[("search_term", "")],
        )
        .await,
    )
    .await;
    assert!(html.contains(r#"Number of search results for "": 2"#));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn search_folds_non_ascii_case(pool: SqlitePool) {
    create_venue(&pool, "CAFÉ LUNA", "Montréal", "NY").await;
    create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;

    let html = body_text(
        post_form(
            common::build_test_app(pool),
            "/venues/search",
            &[("search_term", "café")],
        )
        .await,
    )
    .await;
    assert!(html.contains(r#"Number of search results for "café": 1"#));
    assert!(html.contains("CAFÉ LUNA"));
}

// ---------------------------------------------------------------------------
// Edit
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn edit_form_is_prefilled(pool: SqlitePool) {
    let id = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;

    let response = get(common::build_test_app(pool), &format!("/venues/{id}/edit")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"value="The Musical Hop""#));
    assert!(html.contains(r#"<option value="CA" selected>CA</option>"#));
    assert!(html.contains(r#"<option value="Jazz" selected>Jazz</option>"#));
    assert!(html.contains(r#"<option value="Reggae" selected>Reggae</option>"#));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn edit_venue_updates_and_redirects_to_detail(pool: SqlitePool) {
    let id = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let mut fields = venue_form("The Musical Hop Annex", "Oakland", "CA");
    fields.push(("genres", "Folk"));

    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/venues/{id}/edit"),
        &fields,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/venues/{id}"));
    assert_eq!(
        flash_of(&response).message,
        "Venue The Musical Hop Annex edited successfully"
    );

    let venue = VenueRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(venue.name, "The Musical Hop Annex");
    assert_eq!(venue.city, "Oakland");
    assert_eq!(venue.genre_list(), vec!["Jazz", "Reggae", "Folk"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_edit_leaves_venue_unchanged(pool: SqlitePool) {
    let id = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/venues/{id}/edit"),
        &[("name", ""), ("city", "Oakland")],
    )
    .await;

    assert_eq!(location(&response), format!("/venues/{id}"));
    assert_matches!(flash_of(&response).level, FlashLevel::Error);
    let venue = VenueRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(venue.name, "The Musical Hop");
    assert_eq!(venue.city, "San Francisco");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_venue_and_its_shows(pool: SqlitePool) {
    let id = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_artist(&pool, "Guns N Petals").await;
    create_show(&pool, artist, id, &start_in(Duration::days(3))).await;
    create_show(&pool, artist, id, &start_in(-Duration::days(3))).await;
    assert_eq!(show_count(&pool).await, 2);

    let response = delete(common::build_test_app(pool.clone()), &format!("/venues/{id}")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert_eq!(
        flash_of(&response).message,
        "Venue The Musical Hop was deleted successfully!"
    );

    assert_eq!(show_count(&pool).await, 0);
    let detail = get(common::build_test_app(pool), &format!("/venues/{id}")).await;
    assert_eq!(detail.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn form_post_delete_works_like_delete(pool: SqlitePool) {
    let id = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;

    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/venues/{id}/delete"),
        &[],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_matches!(flash_of(&response).level, FlashLevel::Success);
    assert!(VenueRepo::find_by_id(&pool, id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_missing_venue_flashes_error(pool: SqlitePool) {
    let response = delete(common::build_test_app(pool), "/venues/42").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let flash = flash_of(&response);
    assert_eq!(flash.level, FlashLevel::Error);
    assert_eq!(flash.message, "Venue was not deleted successfully.");
}
