//! Venue listing and detail pages.

use crate::aggregate::{LocationArea, VenueDetail};

use super::search::venue_search_box;
use super::{escape, external_link, genre_tags, image, show_slots, Page};

/// Venues grouped by city and state.
pub fn venue_list_page(areas: &[LocationArea]) -> Page {
    let sections: String = areas
        .iter()
        .map(|area| {
            let items: String = area
                .venues
                .iter()
                .map(|v| {
                    format!(
                        r#"<li><a href="/venues/{}">{}</a> <small>{} upcoming</small></li>"#,
                        v.id,
                        escape(&v.name),
                        v.num_upcoming_shows
                    )
                })
                .collect();
            format!(
                r#"<section class="area"><h3>{}, {}</h3><ul>{items}</ul></section>"#,
                escape(&area.city),
                escape(&area.state)
            )
        })
        .collect();
    let body = format!("{}{sections}", venue_search_box(""));
    Page::new("Venues", body)
}

pub fn venue_detail_page(detail: &VenueDetail) -> Page {
    let venue = &detail.venue;
    let seeking = if venue.seeking_talent {
        format!(
            r#"<p class="seeking">Currently seeking talent: {}</p>"#,
            escape(venue.seeking_description.as_deref().unwrap_or(""))
        )
    } else {
        r#"<p class="not-seeking">Not currently seeking talent</p>"#.to_string()
    };

    let body = format!(
        r#"<p class="entity-id">ID: {id}</p>
        {img}
        <div class="genres">{genres}</div>
        <p>{address}<br>{city}, {state}</p>
        <p>Phone: {phone}</p>
        <p>Website: {website}</p>
        <p>Facebook: {facebook}</p>
        {seeking}
        {upcoming}
        {past}
        <p>
            <a href="/venues/{id}/edit">Edit</a>
            <form method="post" action="/venues/{id}/delete" style="display:inline">
                <button type="submit">Delete venue</button>
            </form>
        </p>"#,
        id = venue.id,
        img = image(venue.image_link.as_deref(), &venue.name),
        genres = genre_tags(&detail.genres),
        address = escape(&venue.address),
        city = escape(&venue.city),
        state = escape(&venue.state),
        phone = escape(&venue.phone),
        website = external_link(venue.website.as_deref()),
        facebook = external_link(venue.facebook_link.as_deref()),
        upcoming = show_slots("Upcoming Shows", "/artists", &detail.upcoming_shows),
        past = show_slots("Past Shows", "/artists", &detail.past_shows),
    );
    Page::new(venue.name.clone(), body)
}
