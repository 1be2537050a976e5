#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use gigbook_api::config::ServerConfig;
use gigbook_api::flash::Flash;
use gigbook_api::router::build_app_router;
use gigbook_api::state::AppState;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Test `ServerConfig`. The database URL is unused; tests hand in the
/// pool `#[sqlx::test]` created.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        request_timeout_secs: 30,
        home_recent_limit: 10,
    }
}

/// Build the production router around `pool`.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

/// GET with a `Cookie` header, for following a flash across a redirect.
pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(encode_form(fields)))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response) -> &str {
    response.headers().get(LOCATION).unwrap().to_str().unwrap()
}

/// The `name=value` pair of the flash cookie a redirect set.
pub fn flash_cookie(response: &Response) -> String {
    let header = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    header.split(';').next().unwrap().to_string()
}

/// Decode the flash a redirect carries.
pub fn flash_of(response: &Response) -> Flash {
    let cookie = flash_cookie(response);
    let (_, value) = cookie.split_once('=').unwrap();
    Flash::decode(value).unwrap()
}

fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for b in raw.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Form fixtures
// ---------------------------------------------------------------------------

pub fn venue_form<'a>(name: &'a str, city: &'a str, state: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("name", name),
        ("city", city),
        ("state", state),
        ("address", "1015 Folsom Street"),
        ("phone", "123-123-1234"),
        ("genres", "Jazz"),
        ("genres", "Reggae"),
        ("image_link", "https://images.example.com/hop.jpg"),
        ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
        ("website_link", "https://www.themusicalhop.com"),
        ("seeking_talent", "y"),
        ("seeking_description", "We are on the lookout for a local artist"),
    ]
}

pub fn artist_form(name: &str) -> Vec<(&str, &str)> {
    vec![
        ("name", name),
        ("city", "San Francisco"),
        ("state", "CA"),
        ("phone", "326-123-5000"),
        ("genres", "Rock n Roll"),
        ("seeking_venue", "y"),
    ]
}

/// Create a venue through the form and return its id.
pub async fn create_venue(pool: &SqlitePool, name: &str, city: &str, state: &str) -> i64 {
    let response = post_form(
        build_test_app(pool.clone()),
        "/venues/create",
        &venue_form(name, city, state),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::SEE_OTHER);
    sqlx::query_scalar("SELECT MAX(id) FROM venues")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_artist(pool: &SqlitePool, name: &str) -> i64 {
    let response = post_form(
        build_test_app(pool.clone()),
        "/artists/create",
        &artist_form(name),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::SEE_OTHER);
    sqlx::query_scalar("SELECT MAX(id) FROM artists")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Create a show through the form; returns the redirect.
pub async fn create_show(pool: &SqlitePool, artist_id: i64, venue_id: i64, start: &str) -> Response {
    let artist_id = artist_id.to_string();
    let venue_id = venue_id.to_string();
    post_form(
        build_test_app(pool.clone()),
        "/shows/create",
        &[
            ("artist_id", artist_id.as_str()),
            ("venue_id", venue_id.as_str()),
            ("start_time", start),
        ],
    )
    .await
}

pub async fn show_count(pool: &SqlitePool) -> i64 {
    gigbook_db::repositories::ShowRepo::count(pool).await.unwrap()
}
