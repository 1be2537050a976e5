//! Search box and the shared search results page.

use crate::aggregate::SearchResults;

use super::{escape, Page};

fn search_box(action: &str, term: &str, placeholder: &str) -> String {
    format!(
        r#"<form method="post" action="{action}" class="search">
            <input type="search" name="search_term" value="{}" placeholder="{placeholder}">
            <button type="submit">Search</button>
        </form>"#,
        escape(term)
    )
}

pub(crate) fn venue_search_box(term: &str) -> String {
    search_box("/venues/search", term, "Find a venue")
}

pub(crate) fn artist_search_box(term: &str) -> String {
    search_box("/artists/search", term, "Find an artist")
}

/// Result page for a venue or artist search.
pub fn search_results_page(
    title: &str,
    base_path: &str,
    search_box: String,
    term: &str,
    results: &SearchResults,
) -> Page {
    let items: String = results
        .data
        .iter()
        .map(|hit| {
            format!(
                r#"<li><a href="{base_path}/{}">{}</a> <small>{} upcoming</small></li>"#,
                hit.id,
                escape(&hit.name),
                hit.num_upcoming_shows
            )
        })
        .collect();
    let body = format!(
        r#"{search_box}
        <h3 class="result-count">Number of search results for "{}": {}</h3>
        <ul class="results">{items}</ul>"#,
        escape(term),
        results.count
    );
    Page::new(title, body)
}
