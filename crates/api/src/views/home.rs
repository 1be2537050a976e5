use gigbook_db::models::artist::Artist;
use gigbook_db::models::venue::Venue;

use super::{escape, Page};

/// Landing page with the most recently listed venues and artists.
pub fn home_page(venues: &[Venue], artists: &[Artist]) -> Page {
    let venue_items: String = venues
        .iter()
        .map(|v| {
            format!(
                r#"<li><a href="/venues/{}">{}</a> <small>{}, {}</small></li>"#,
                v.id,
                escape(&v.name),
                escape(&v.city),
                escape(&v.state)
            )
        })
        .collect();
    let artist_items: String = artists
        .iter()
        .map(|a| {
            format!(
                r#"<li><a href="/artists/{}">{}</a> <small>{}, {}</small></li>"#,
                a.id,
                escape(&a.name),
                escape(&a.city),
                escape(&a.state)
            )
        })
        .collect();

    let body = format!(
        r#"<section>
            <h2>Recently listed venues</h2>
            <ul class="recent-venues">{venue_items}</ul>
        </section>
        <section>
            <h2>Recently listed artists</h2>
            <ul class="recent-artists">{artist_items}</ul>
        </section>"#
    );
    Page::new("Gigbook", body)
}
