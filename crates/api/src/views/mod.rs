//! Server-rendered HTML pages.
//!
//! Pages are plain `format!` templates wrapped in a shared layout. Every
//! interpolated value that originates from a user or the database goes
//! through [`escape`].

pub mod artists;
pub mod errors;
pub mod forms;
pub mod home;
pub mod search;
pub mod shows;
pub mod venues;

use axum::http::header::SET_COOKIE;
use axum::response::{Html, IntoResponse, Response};

use crate::aggregate::ShowSlot;
use crate::flash::{clear_cookie, Flash, IncomingFlash};

/// Escape text for inclusion in HTML content or a quoted attribute.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

/// A full page: title, body markup and the flash to show above it.
pub struct Page {
    title: String,
    body: String,
    flash: Option<Flash>,
}

impl Page {
    pub fn new(title: impl Into<String>, body: String) -> Self {
        Self {
            title: title.into(),
            body,
            flash: None,
        }
    }

    /// Show the flash delivered with this request. Rendering it also clears
    /// the cookie.
    pub fn with_flash(mut self, incoming: IncomingFlash) -> Self {
        self.flash = incoming.0;
        self
    }

    pub fn render(&self) -> String {
        layout(&self.title, self.flash.as_ref(), &self.body)
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        let html = Html(self.render());
        if self.flash.is_some() {
            ([(SET_COOKIE, clear_cookie())], html).into_response()
        } else {
            html.into_response()
        }
    }
}

fn flash_banner(flash: &Flash) -> String {
    format!(
        r#"<div class="flash flash-{}" role="alert">{}</div>"#,
        flash.level.as_str(),
        escape(&flash.message)
    )
}

pub(crate) fn layout(title: &str, flash: Option<&Flash>, body: &str) -> String {
    let banner = flash.map(flash_banner).unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Gigbook</title>
    <style>
        body {{ font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 0; color: #222; }}
        nav {{ background: #1f1f2e; padding: 12px 24px; }}
        nav a {{ color: #eee; margin-right: 18px; text-decoration: none; }}
        main {{ padding: 24px; max-width: 960px; margin: 0 auto; }}
        .flash {{ padding: 10px 14px; margin-bottom: 18px; border-radius: 4px; }}
        .flash-success {{ background: #e3f6e8; border: 1px solid #7cc68d; }}
        .flash-error {{ background: #fbe5e5; border: 1px solid #d98080; }}
        .genre {{ display: inline-block; background: #eef; padding: 2px 8px; margin: 2px; border-radius: 10px; }}
        .show {{ border: 1px solid #ddd; padding: 8px; margin: 6px 0; }}
        label {{ display: block; margin-top: 10px; }}
    </style>
</head>
<body>
    <nav>
        <a href="/">Gigbook</a>
        <a href="/venues">Venues</a>
        <a href="/artists">Artists</a>
        <a href="/shows">Shows</a>
        <a href="/venues/create">List a venue</a>
        <a href="/artists/create">List an artist</a>
        <a href="/shows/create">List a show</a>
    </nav>
    <main>
        {banner}
        <h1>{title}</h1>
        {body}
    </main>
</body>
</html>"#,
        title = escape(title),
    )
}

/// Genre tags for a detail page.
pub(crate) fn genre_tags(genres: &[String]) -> String {
    genres
        .iter()
        .map(|g| format!(r#"<span class="genre">{}</span>"#, escape(g)))
        .collect()
}

/// An `<a>` to an optional external link, or an em placeholder.
pub(crate) fn external_link(href: Option<&str>) -> String {
    match href {
        Some(href) => format!(
            r#"<a href="{0}" rel="noopener noreferrer">{0}</a>"#,
            escape(href)
        ),
        None => "<em>none</em>".to_string(),
    }
}

pub(crate) fn image(src: Option<&str>, alt: &str) -> String {
    src.map(|src| {
        format!(
            r#"<img src="{}" alt="{}" width="120">"#,
            escape(src),
            escape(alt)
        )
    })
    .unwrap_or_default()
}

/// Show cards on a detail page, linking each counterpart under `base_path`.
pub(crate) fn show_slots(heading: &str, base_path: &str, slots: &[ShowSlot]) -> String {
    let cards: String = slots
        .iter()
        .map(|s| {
            format!(
                r#"<div class="show">{} <a href="{base_path}/{}">{}</a> <span class="start-time">{}</span></div>"#,
                image(s.counterpart_image_link.as_deref(), &s.counterpart_name),
                s.counterpart_id,
                escape(&s.counterpart_name),
                escape(&s.start_time)
            )
        })
        .collect();
    format!(
        r#"<section><h2>{} {heading}</h2>{cards}</section>"#,
        slots.len()
    )
}
