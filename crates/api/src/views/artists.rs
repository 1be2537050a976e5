use gigbook_db::models::artist::Artist;

use crate::aggregate::ArtistDetail;

use super::search::artist_search_box;
use super::{escape, external_link, genre_tags, image, show_slots, Page};

pub fn artist_list_page(artists: &[Artist]) -> Page {
    let items: String = artists
        .iter()
        .map(|a| format!(r#"<li><a href="/artists/{}">{}</a></li>"#, a.id, escape(&a.name)))
        .collect();
    let body = format!(r#"{}<ul class="artists">{items}</ul>"#, artist_search_box(""));
    Page::new("Artists", body)
}

pub fn artist_detail_page(detail: &ArtistDetail) -> Page {
    let artist = &detail.artist;
    let seeking = if artist.seeking_venue {
        format!(
            r#"<p class="seeking">Currently seeking performance venues: {}</p>"#,
            escape(artist.seeking_description.as_deref().unwrap_or(""))
        )
    } else {
        r#"<p class="not-seeking">Not currently seeking performance venues</p>"#.to_string()
    };

    let body = format!(
        r#"<p class="entity-id">ID: {id}</p>
        {img}
        <div class="genres">{genres}</div>
        <p>{city}, {state}</p>
        <p>Phone: {phone}</p>
        <p>Website: {website}</p>
        <p>Facebook: {facebook}</p>
        {seeking}
        {upcoming}
        {past}
        <p><a href="/artists/{id}/edit">Edit</a></p>"#,
        id = artist.id,
        img = image(artist.image_link.as_deref(), &artist.name),
        genres = genre_tags(&detail.genres),
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = escape(artist.phone.as_deref().unwrap_or("")),
        website = external_link(artist.website.as_deref()),
        facebook = external_link(artist.facebook_link.as_deref()),
        upcoming = show_slots("Upcoming Shows", "/venues", &detail.upcoming_shows),
        past = show_slots("Past Shows", "/venues", &detail.past_shows),
    );
    Page::new(artist.name.clone(), body)
}
