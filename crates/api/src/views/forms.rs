//! Create and edit forms.
//!
//! The venue and artist forms share their field markup. Edit pages prefill
//! from the stored row, with the genre multi-select and state select marking
//! the current values as selected.

use gigbook_core::genre::Genre;
use gigbook_core::us_state::US_STATES;

use crate::forms::{ArtistForm, VenueForm};

use super::{escape, Page};

fn text_input(label: &str, name: &str, value: &str, required: bool) -> String {
    format!(
        r#"<label>{label} <input type="text" name="{name}" value="{}"{}></label>"#,
        escape(value),
        if required { " required" } else { "" }
    )
}

fn url_input(label: &str, name: &str, value: Option<&str>) -> String {
    format!(
        r#"<label>{label} <input type="url" name="{name}" value="{}"></label>"#,
        escape(value.unwrap_or(""))
    )
}

fn checkbox(label: &str, name: &str, checked: bool) -> String {
    format!(
        r#"<label><input type="checkbox" name="{name}" value="y"{}> {label}</label>"#,
        if checked { " checked" } else { "" }
    )
}

fn state_select(current: &str) -> String {
    let options: String = US_STATES
        .iter()
        .map(|code| {
            let selected = if *code == current { " selected" } else { "" };
            format!(r#"<option value="{code}"{selected}>{code}</option>"#)
        })
        .collect();
    format!(r#"<label>State <select name="state" required>{options}</select></label>"#)
}

fn genre_select(current: &[String]) -> String {
    let options: String = Genre::ALL
        .iter()
        .map(|genre| {
            let label = genre.as_str();
            let selected = if current.iter().any(|g| g == label) {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{0}"{selected}>{0}</option>"#,
                escape(label)
            )
        })
        .collect();
    format!(r#"<label>Genres <select name="genres" multiple required>{options}</select></label>"#)
}

fn description(value: Option<&str>) -> String {
    format!(
        r#"<label>Seeking description <textarea name="seeking_description">{}</textarea></label>"#,
        escape(value.unwrap_or(""))
    )
}

fn wrap(action: &str, fields: String, submit: &str) -> String {
    format!(
        r#"<form method="post" action="{action}" class="entity-form">
            {fields}
            <button type="submit">{submit}</button>
        </form>"#
    )
}

/// Venue form, blank for `/venues/create` or prefilled for edit.
pub fn venue_form_page(title: &str, action: &str, form: &VenueForm) -> Page {
    let fields = [
        text_input("Name", "name", &form.name, true),
        text_input("City", "city", &form.city, true),
        state_select(&form.state),
        text_input("Address", "address", &form.address, true),
        text_input("Phone", "phone", &form.phone, true),
        genre_select(&form.genres),
        url_input("Image link", "image_link", form.image_link.as_deref()),
        url_input("Facebook link", "facebook_link", form.facebook_link.as_deref()),
        url_input("Website", "website_link", form.website_link.as_deref()),
        checkbox("Seeking talent", "seeking_talent", form.seeking_talent),
        description(form.seeking_description.as_deref()),
    ]
    .concat();
    Page::new(title, wrap(action, fields, "Save venue"))
}

pub fn artist_form_page(title: &str, action: &str, form: &ArtistForm) -> Page {
    let fields = [
        text_input("Name", "name", &form.name, true),
        text_input("City", "city", &form.city, true),
        state_select(&form.state),
        text_input("Phone", "phone", form.phone.as_deref().unwrap_or(""), false),
        genre_select(&form.genres),
        url_input("Image link", "image_link", form.image_link.as_deref()),
        url_input("Facebook link", "facebook_link", form.facebook_link.as_deref()),
        url_input("Website", "website_link", form.website_link.as_deref()),
        checkbox("Seeking venue", "seeking_venue", form.seeking_venue),
        description(form.seeking_description.as_deref()),
    ]
    .concat();
    Page::new(title, wrap(action, fields, "Save artist"))
}

pub fn show_form_page() -> Page {
    let fields = [
        r#"<label>Artist ID <input type="number" name="artist_id" min="1" required></label>"#,
        r#"<label>Venue ID <input type="number" name="venue_id" min="1" required></label>"#,
        r#"<label>Start time <input type="datetime-local" name="start_time" required></label>"#,
    ]
    .concat();
    Page::new("List a new show", wrap("/shows/create", fields, "Create show"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_form_marks_current_values() {
        let form = VenueForm {
            name: "The Musical Hop".into(),
            state: "CA".into(),
            genres: vec!["Jazz".into(), "R&B".into()],
            seeking_talent: true,
            ..VenueForm::default()
        };
        let html = venue_form_page("Edit venue", "/venues/1/edit", &form).render();
        assert!(html.contains(r#"value="The Musical Hop""#));
        assert!(html.contains(r#"<option value="CA" selected>CA</option>"#));
        assert!(html.contains(r#"<option value="Jazz" selected>Jazz</option>"#));
        assert!(html.contains(r#"<option value="R&amp;B" selected>R&amp;B</option>"#));
        assert!(html.contains(r#"<option value="Folk">Folk</option>"#));
        assert!(html.contains(r#"name="seeking_talent" value="y" checked"#));
        assert!(html.contains(r#"action="/venues/1/edit""#));
    }

    #[test]
    fn blank_artist_form_has_no_selection() {
        let html = artist_form_page("List a new artist", "/artists/create", &ArtistForm::default())
            .render();
        assert!(!html.contains(" selected"));
        assert!(!html.contains(" checked"));
    }
}
