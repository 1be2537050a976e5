//! Derived views assembled from repository rows.
//!
//! Everything here is computed from rows already fetched and the caller's
//! `now`; nothing touches the database and persisted rows are never
//! modified. Handlers fetch, call a builder, then render.

use std::collections::HashMap;

use gigbook_core::location::group_by_location;
use gigbook_core::schedule::{
    classify, format_datetime, format_start_time, partition_by_start, DateStyle, ShowTiming,
};
use gigbook_core::types::{DbId, Timestamp};
use gigbook_db::models::artist::Artist;
use gigbook_db::models::show::{ShowListing, ShowStart};
use gigbook_db::models::venue::Venue;

/// Upcoming show count per owning venue or artist. Owners with no upcoming
/// shows are absent.
pub fn upcoming_by_owner(starts: &[ShowStart], now: Timestamp) -> HashMap<DbId, usize> {
    let mut counts = HashMap::new();
    for start in starts {
        if classify(start.start_time, now) == ShowTiming::Upcoming {
            *counts.entry(start.owner_id).or_insert(0) += 1;
        }
    }
    counts
}

// ---------------------------------------------------------------------------
// Venue listing by location
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Group `venues` (already in listing order) by `(city, state)`, attaching
/// each venue's upcoming show count.
pub fn venues_by_location(
    venues: Vec<Venue>,
    starts: &[ShowStart],
    now: Timestamp,
) -> Vec<LocationArea> {
    let upcoming = upcoming_by_owner(starts, now);
    group_by_location(venues, |v| (v.city.as_str(), v.state.as_str()))
        .into_iter()
        .map(|group| LocationArea {
            city: group.city,
            state: group.state,
            venues: group
                .items
                .into_iter()
                .map(|v| VenueSummary {
                    num_upcoming_shows: upcoming.get(&v.id).copied().unwrap_or(0),
                    id: v.id,
                    name: v.name,
                })
                .collect(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Search results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchHit>,
}

fn search_results<I>(hits: I, starts: &[ShowStart], now: Timestamp) -> SearchResults
where
    I: IntoIterator<Item = (DbId, String)>,
{
    let upcoming = upcoming_by_owner(starts, now);
    let data: Vec<SearchHit> = hits
        .into_iter()
        .map(|(id, name)| SearchHit {
            num_upcoming_shows: upcoming.get(&id).copied().unwrap_or(0),
            id,
            name,
        })
        .collect();
    SearchResults {
        count: data.len(),
        data,
    }
}

pub fn venue_search_results(
    venues: Vec<Venue>,
    starts: &[ShowStart],
    now: Timestamp,
) -> SearchResults {
    search_results(venues.into_iter().map(|v| (v.id, v.name)), starts, now)
}

pub fn artist_search_results(
    artists: Vec<Artist>,
    starts: &[ShowStart],
    now: Timestamp,
) -> SearchResults {
    search_results(artists.into_iter().map(|a| (a.id, a.name)), starts, now)
}

// ---------------------------------------------------------------------------
// Detail pages
// ---------------------------------------------------------------------------

/// One show as seen from a venue or artist page: the other party plus the
/// formatted start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowSlot {
    pub counterpart_id: DbId,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
    pub start_time: String,
}

#[derive(Debug, Clone)]
pub struct VenueDetail {
    pub venue: Venue,
    pub genres: Vec<String>,
    pub past_shows: Vec<ShowSlot>,
    pub upcoming_shows: Vec<ShowSlot>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Clone)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub genres: Vec<String>,
    pub past_shows: Vec<ShowSlot>,
    pub upcoming_shows: Vec<ShowSlot>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Venue page: its shows split around `now`, each naming the artist.
pub fn venue_detail(venue: Venue, shows: Vec<ShowListing>, now: Timestamp) -> VenueDetail {
    let parts = partition_by_start(shows, |s| s.start_time, now).map(|s| ShowSlot {
        counterpart_id: s.artist_id,
        counterpart_name: s.artist_name,
        counterpart_image_link: s.artist_image_link,
        start_time: format_start_time(s.start_time),
    });
    VenueDetail {
        genres: venue.genre_list(),
        venue,
        past_shows_count: parts.past_count(),
        upcoming_shows_count: parts.upcoming_count(),
        past_shows: parts.past,
        upcoming_shows: parts.upcoming,
    }
}

/// Artist page: its shows split around `now`, each naming the venue.
pub fn artist_detail(artist: Artist, shows: Vec<ShowListing>, now: Timestamp) -> ArtistDetail {
    let parts = partition_by_start(shows, |s| s.start_time, now).map(|s| ShowSlot {
        counterpart_id: s.venue_id,
        counterpart_name: s.venue_name,
        counterpart_image_link: s.venue_image_link,
        start_time: format_start_time(s.start_time),
    });
    ArtistDetail {
        genres: artist.genre_list(),
        artist,
        past_shows_count: parts.past_count(),
        upcoming_shows_count: parts.upcoming_count(),
        past_shows: parts.past,
        upcoming_shows: parts.upcoming,
    }
}

// ---------------------------------------------------------------------------
// Show listing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowRow {
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
    /// `DateStyle::Full` rendering, shown as the card heading.
    pub start_time_long: String,
    pub start_time_medium: String,
}

pub fn show_rows(shows: Vec<ShowListing>) -> Vec<ShowRow> {
    shows
        .into_iter()
        .map(|s| ShowRow {
            venue_id: s.venue_id,
            venue_name: s.venue_name,
            artist_id: s.artist_id,
            artist_name: s.artist_name,
            artist_image_link: s.artist_image_link,
            start_time: format_start_time(s.start_time),
            start_time_long: format_datetime(s.start_time, DateStyle::Full),
            start_time_medium: format_datetime(s.start_time, DateStyle::Medium),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap()
    }

    fn venue(id: DbId, name: &str, city: &str, state: &str) -> Venue {
        Venue {
            id,
            name: name.into(),
            city: city.into(),
            state: state.into(),
            address: "1 Main St".into(),
            phone: "123-123-1234".into(),
            genres: "Jazz,Folk".into(),
            image_link: None,
            facebook_link: None,
            website: None,
            seeking_talent: false,
            seeking_description: None,
            created_at: now(),
        }
    }

    fn artist(id: DbId, name: &str) -> Artist {
        Artist {
            id,
            name: name.into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            phone: None,
            genres: "Rock n Roll".into(),
            image_link: Some("https://img.example/a.png".into()),
            facebook_link: None,
            website: None,
            seeking_venue: true,
            seeking_description: None,
            created_at: now(),
        }
    }

    fn start(owner_id: DbId, offset: Duration) -> ShowStart {
        ShowStart {
            owner_id,
            start_time: now() + offset,
        }
    }

    fn listing(id: DbId, start_time: Timestamp) -> ShowListing {
        ShowListing {
            id,
            start_time,
            venue_id: 1,
            venue_name: "The Musical Hop".into(),
            venue_image_link: None,
            artist_id: 4,
            artist_name: "Guns N Petals".into(),
            artist_image_link: Some("https://img.example/g.png".into()),
        }
    }

    #[test]
    fn upcoming_counts_skip_past_and_boundary() {
        let starts = [
            start(1, Duration::days(1)),
            start(1, Duration::days(2)),
            start(1, Duration::zero()),
            start(2, -Duration::days(1)),
        ];
        let counts = upcoming_by_owner(&starts, now());
        assert_eq!(counts.get(&1), Some(&2));
        assert_eq!(counts.get(&2), None);
    }

    #[test]
    fn venues_grouped_with_counts() {
        let venues = vec![
            venue(1, "The Musical Hop", "San Francisco", "CA"),
            venue(2, "The Dueling Pianos Bar", "New York", "NY"),
            venue(3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
        ];
        let starts = [start(3, Duration::hours(2)), start(1, -Duration::hours(2))];
        let areas = venues_by_location(venues, &starts, now());

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].city, "San Francisco");
        assert_eq!(
            areas[0].venues,
            vec![
                VenueSummary {
                    id: 1,
                    name: "The Musical Hop".into(),
                    num_upcoming_shows: 0
                },
                VenueSummary {
                    id: 3,
                    name: "Park Square Live Music & Coffee".into(),
                    num_upcoming_shows: 1
                },
            ]
        );
        assert_eq!(areas[1].state, "NY");
        assert_eq!(areas[1].venues.len(), 1);
    }

    #[test]
    fn search_results_count_matches_data() {
        let artists = vec![artist(4, "Guns N Petals"), artist(6, "The Wild Sax Band")];
        let starts = [start(6, Duration::days(3))];
        let results = artist_search_results(artists, &starts, now());
        assert_eq!(results.count, 2);
        assert_eq!(results.data[0].num_upcoming_shows, 0);
        assert_eq!(results.data[1].num_upcoming_shows, 1);
    }

    #[test]
    fn empty_search_results() {
        let results = venue_search_results(Vec::new(), &[], now());
        assert_eq!(results.count, 0);
        assert!(results.data.is_empty());
    }

    #[test]
    fn venue_detail_splits_shows_around_now() {
        let shows = vec![
            listing(1, now() - Duration::days(10)),
            listing(2, now()),
            listing(3, now() + Duration::days(10)),
        ];
        let detail = venue_detail(venue(1, "The Musical Hop", "San Francisco", "CA"), shows, now());

        assert_eq!(detail.genres, vec!["Jazz", "Folk"]);
        assert_eq!(detail.past_shows_count, 2);
        assert_eq!(detail.upcoming_shows_count, 1);
        let upcoming = &detail.upcoming_shows[0];
        assert_eq!(upcoming.counterpart_id, 4);
        assert_eq!(upcoming.counterpart_name, "Guns N Petals");
        assert_eq!(upcoming.start_time, "01/11/2030, 12:00:00");
        assert_eq!(detail.venue.genres, "Jazz,Folk");
    }

    #[test]
    fn artist_detail_names_the_venue() {
        let shows = vec![listing(1, now() + Duration::hours(1))];
        let detail = artist_detail(artist(4, "Guns N Petals"), shows, now());
        assert_eq!(detail.past_shows_count, 0);
        assert_eq!(detail.upcoming_shows[0].counterpart_name, "The Musical Hop");
        assert_eq!(detail.upcoming_shows[0].counterpart_image_link, None);
        assert_eq!(detail.genres, vec!["Rock n Roll"]);
    }

    #[test]
    fn detail_without_shows_has_zero_counts() {
        let detail = venue_detail(venue(9, "Empty Room", "Austin", "TX"), Vec::new(), now());
        assert_eq!(detail.past_shows_count, 0);
        assert_eq!(detail.upcoming_shows_count, 0);
    }

    #[test]
    fn show_rows_carry_every_time_format() {
        let ts = Utc.with_ymd_and_hms(2035, 5, 21, 21, 30, 0).unwrap();
        let rows = show_rows(vec![listing(1, ts)]);
        assert_eq!(rows[0].start_time, "05/21/2035, 21:30:00");
        assert_eq!(rows[0].start_time_long, "Monday May, 21, 2035 at 9:30PM");
        assert_eq!(rows[0].start_time_medium, "Mon 05, 21, 2035 9:30PM");
        assert_eq!(rows[0].artist_name, "Guns N Petals");
    }
}
