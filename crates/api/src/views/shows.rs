use crate::aggregate::ShowRow;

use super::{escape, image, Page};

pub fn show_list_page(rows: &[ShowRow]) -> Page {
    let cards: String = rows
        .iter()
        .map(|row| {
            format!(
                r#"<div class="show">
                    <h4>{}</h4>
                    {}
                    <p><a href="/artists/{}">{}</a> at <a href="/venues/{}">{}</a></p>
                    <p class="start-time"><time title="{}">{}</time></p>
                </div>"#,
                escape(&row.start_time_long),
                image(row.artist_image_link.as_deref(), &row.artist_name),
                row.artist_id,
                escape(&row.artist_name),
                row.venue_id,
                escape(&row.venue_name),
                escape(&row.start_time_medium),
                escape(&row.start_time)
            )
        })
        .collect();
    Page::new("Shows", cards)
}
