//! Form validation layer.
//!
//! Submitted bodies are decoded as ordered `(name, value)` pairs so repeated
//! keys (the `genres` multi-select) survive. Each form struct normalizes the
//! raw pairs, validates with `validator`, and converts into the repository
//! input on success.

use std::borrow::Cow;

use gigbook_core::genre::Genre;
use gigbook_core::schedule::parse_start_time;
use gigbook_core::types::{DbId, Timestamp};
use gigbook_core::us_state::is_valid_state;
use gigbook_db::models::artist::{Artist, ArtistFields};
use gigbook_db::models::show::CreateShow;
use gigbook_db::models::venue::{Venue, VenueFields};
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

/// Raw submitted fields in submission order.
#[derive(Debug, Clone, Default)]
pub struct FormFields(Vec<(String, String)>);

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

impl FormFields {
    /// First value for `key`, trimmed; empty if absent.
    pub fn text(&self, key: &str) -> String {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.trim().to_string())
            .unwrap_or_default()
    }

    /// First value for `key`, trimmed; `None` if absent or blank.
    pub fn optional(&self, key: &str) -> Option<String> {
        Some(self.text(key)).filter(|v| !v.is_empty())
    }

    /// Every non-blank value submitted under `key`, in order.
    pub fn all(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    }

    /// Checkbox semantics: checked unless absent, blank or `false`.
    pub fn checkbox(&self, key: &str) -> bool {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .is_some_and(|(_, v)| {
                let v = v.trim();
                !v.is_empty() && !v.eq_ignore_ascii_case("false")
            })
    }
}

/// Body of the venue and artist search forms.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn validate_state(state: &str) -> Result<(), ValidationError> {
    if is_valid_state(state) {
        Ok(())
    } else {
        Err(invalid("state", "Choose a US state"))
    }
}

/// Digits with optional `-`, `.`, space and parentheses, an optional leading
/// `+`, and between 7 and 15 digits in total.
fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let body = phone.strip_prefix('+').unwrap_or(phone);
    let allowed = body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '-' | '.' | ' ' | '(' | ')'));
    let digits = body.chars().filter(char::is_ascii_digit).count();
    if allowed && (7..=15).contains(&digits) {
        Ok(())
    } else {
        Err(invalid("phone", "Enter a valid phone number"))
    }
}

/// Links are rendered as `href`/`src`, so only web schemes are accepted.
fn validate_web_link(link: &str) -> Result<(), ValidationError> {
    let scheme = link.split_once(':').map(|(scheme, _)| scheme);
    match scheme {
        Some(s) if s.eq_ignore_ascii_case("http") || s.eq_ignore_ascii_case("https") => Ok(()),
        _ => Err(invalid("link_scheme", "Links must start with http:// or https://")),
    }
}

fn validate_genres(genres: &[String]) -> Result<(), ValidationError> {
    if genres.iter().all(|g| g.parse::<Genre>().is_ok()) {
        Ok(())
    } else {
        Err(invalid("genres", "Choose genres from the list"))
    }
}

// ---------------------------------------------------------------------------
// Venue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Validate)]
pub struct VenueForm {
    #[validate(length(min = 1, max = 120, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 120, message = "City is required"))]
    pub city: String,
    #[validate(custom(function = "validate_state"))]
    pub state: String,
    #[validate(length(min = 1, max = 120, message = "Address is required"))]
    pub address: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    #[validate(
        length(min = 1, message = "Choose at least one genre"),
        custom(function = "validate_genres")
    )]
    pub genres: Vec<String>,
    #[validate(
        url(message = "Image link must be a URL"),
        custom(function = "validate_web_link")
    )]
    pub image_link: Option<String>,
    #[validate(
        url(message = "Facebook link must be a URL"),
        custom(function = "validate_web_link")
    )]
    pub facebook_link: Option<String>,
    #[validate(
        url(message = "Website must be a URL"),
        custom(function = "validate_web_link")
    )]
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    #[validate(length(max = 500))]
    pub seeking_description: Option<String>,
}

impl VenueForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state"),
            address: fields.text("address"),
            phone: fields.text("phone"),
            genres: fields.all("genres"),
            image_link: fields.optional("image_link"),
            facebook_link: fields.optional("facebook_link"),
            website_link: fields.optional("website_link"),
            seeking_talent: fields.checkbox("seeking_talent"),
            seeking_description: fields.optional("seeking_description"),
        }
    }

    /// Prefill for the edit form, with the stored genre string split back
    /// into its list.
    pub fn from_venue(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            genres: venue.genre_list(),
            image_link: venue.image_link.clone(),
            facebook_link: venue.facebook_link.clone(),
            website_link: venue.website.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone(),
        }
    }

    pub fn validated(self) -> Result<VenueFields, ValidationErrors> {
        self.validate()?;
        Ok(VenueFields {
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            genres: self.genres,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website: self.website_link,
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description,
            created_at: None,
        })
    }
}

// ---------------------------------------------------------------------------
// Artist
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Validate)]
pub struct ArtistForm {
    #[validate(length(min = 1, max = 120, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 120, message = "City is required"))]
    pub city: String,
    #[validate(custom(function = "validate_state"))]
    pub state: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[validate(
        length(min = 1, message = "Choose at least one genre"),
        custom(function = "validate_genres")
    )]
    pub genres: Vec<String>,
    #[validate(
        url(message = "Image link must be a URL"),
        custom(function = "validate_web_link")
    )]
    pub image_link: Option<String>,
    #[validate(
        url(message = "Facebook link must be a URL"),
        custom(function = "validate_web_link")
    )]
    pub facebook_link: Option<String>,
    #[validate(
        url(message = "Website must be a URL"),
        custom(function = "validate_web_link")
    )]
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    #[validate(length(max = 500))]
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state"),
            phone: fields.optional("phone"),
            genres: fields.all("genres"),
            image_link: fields.optional("image_link"),
            facebook_link: fields.optional("facebook_link"),
            website_link: fields.optional("website_link"),
            seeking_venue: fields.checkbox("seeking_venue"),
            seeking_description: fields.optional("seeking_description"),
        }
    }

    pub fn from_artist(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            genres: artist.genre_list(),
            image_link: artist.image_link.clone(),
            facebook_link: artist.facebook_link.clone(),
            website_link: artist.website.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone(),
        }
    }

    pub fn validated(self) -> Result<ArtistFields, ValidationErrors> {
        self.validate()?;
        Ok(ArtistFields {
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            genres: self.genres,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website: self.website_link,
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description,
            created_at: None,
        })
    }
}

// ---------------------------------------------------------------------------
// Show
// ---------------------------------------------------------------------------

/// Show submission. Ids and the start time are parsed while reading the
/// fields; anything unparseable is left `None` and rejected by `required`.
#[derive(Debug, Clone, Default, Validate)]
pub struct ShowForm {
    #[validate(
        required(message = "Artist ID is required"),
        range(min = 1, message = "Artist ID must be positive")
    )]
    pub artist_id: Option<DbId>,
    #[validate(
        required(message = "Venue ID is required"),
        range(min = 1, message = "Venue ID must be positive")
    )]
    pub venue_id: Option<DbId>,
    #[validate(required(message = "Start time is required"))]
    pub start_time: Option<Timestamp>,
}

impl ShowForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            artist_id: fields.text("artist_id").parse().ok(),
            venue_id: fields.text("venue_id").parse().ok(),
            start_time: parse_start_time(&fields.text("start_time")),
        }
    }

    pub fn validated(self) -> Result<CreateShow, ValidationErrors> {
        self.validate()?;
        match (self.artist_id, self.venue_id, self.start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) => Ok(CreateShow {
                artist_id,
                venue_id,
                start_time,
            }),
            // `required` has already rejected every missing value.
            _ => Err(ValidationErrors::new()),
        }
    }
}
