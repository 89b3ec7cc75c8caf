//! Client-facing representations of venues, artists and shows.
//!
//! Each type flattens an entity and attaches the fields derived at read time:
//! genre lists and the past/upcoming show split.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::db::entities::{artist, show, venue};

use super::schedule;

/// An artist's appearance at a venue, as listed on the venue page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistAppearance {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// A show on an artist's page, seen from the venue side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueAppearance {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueDetail {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub past_shows: Vec<ArtistAppearance>,
    pub upcoming_shows: Vec<ArtistAppearance>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetail {
    pub fn format(
        venue: venue::Model,
        shows: Vec<(show::Model, artist::Model)>,
        now: NaiveDateTime,
    ) -> Self {
        let appearances: Vec<ArtistAppearance> = shows
            .into_iter()
            .map(|(show, artist)| ArtistAppearance {
                artist_id: artist.id,
                artist_name: artist.name,
                artist_image_link: artist.image_link,
                start_time: show.start_time,
            })
            .collect();
        let (past_shows, upcoming_shows) = schedule::partition(appearances, now, |a| a.start_time);

        Self {
            genres: venue.genre_list(),
            id: venue.id,
            name: venue.name,
            address: venue.address,
            city: venue.city,
            state: venue.state,
            phone: venue.phone,
            image_link: venue.image_link,
            facebook_link: venue.facebook_link,
            website: venue.website_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistDetail {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venues: bool,
    pub seeking_description: Option<String>,
    pub past_shows: Vec<VenueAppearance>,
    pub upcoming_shows: Vec<VenueAppearance>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetail {
    pub fn format(
        artist: artist::Model,
        shows: Vec<(show::Model, venue::Model)>,
        now: NaiveDateTime,
    ) -> Self {
        let appearances: Vec<VenueAppearance> = shows
            .into_iter()
            .map(|(show, venue)| VenueAppearance {
                venue_id: venue.id,
                venue_name: venue.name,
                venue_image_link: venue.image_link,
                start_time: show.start_time,
            })
            .collect();
        let (past_shows, upcoming_shows) = schedule::partition(appearances, now, |a| a.start_time);

        Self {
            genres: artist.genre_list(),
            id: artist.id,
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            image_link: artist.image_link,
            facebook_link: artist.facebook_link,
            website: artist.website_link,
            seeking_venues: artist.seeking_venues,
            seeking_description: artist.seeking_description,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

/// One row of the shows index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

impl ShowListing {
    pub fn format(show: show::Model, venue: venue::Model, artist: artist::Model) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: venue.name,
            artist_id: show.artist_id,
            artist_name: artist.name,
            artist_image_link: artist.image_link,
            start_time: show.start_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistListing {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchHit>,
}

impl SearchResults {
    pub fn new(data: Vec<SearchHit>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap()
    }

    fn fillmore() -> venue::Model {
        venue::Model {
            id: 1,
            name: "The Fillmore".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1805 Geary Blvd".to_string(),
            phone: Some("415-555-0100".to_string()),
            image_link: None,
            facebook_link: None,
            website_link: Some("https://thefillmore.example".to_string()),
            genres: "Jazz, Rock".to_string(),
            seeking_talent: true,
            seeking_description: None,
        }
    }

    fn guns_n_petals() -> artist::Model {
        artist::Model {
            id: 4,
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: None,
            genres: "Rock n Roll".to_string(),
            image_link: Some("https://images.example/gnp.jpg".to_string()),
            facebook_link: None,
            website_link: None,
            seeking_venues: true,
            seeking_description: Some("Looking for shows".to_string()),
        }
    }

    fn show(id: i32, start_time: NaiveDateTime) -> show::Model {
        show::Model {
            id,
            artist_id: 4,
            venue_id: 1,
            start_time,
        }
    }

    #[test]
    fn test_venue_detail_without_shows() {
        let detail = VenueDetail::format(fillmore(), vec![], at(2024, 6, 1));

        assert_eq!(detail.genres, vec!["Jazz".to_string(), "Rock".to_string()]);
        assert!(detail.seeking_talent);
        assert_eq!(detail.website.as_deref(), Some("https://thefillmore.example"));
        assert_eq!(detail.past_shows_count, 0);
        assert_eq!(detail.upcoming_shows_count, 0);
    }

    #[test]
    fn test_venue_detail_splits_shows() {
        let shows = vec![
            (show(1, at(2019, 5, 21)), guns_n_petals()),
            (show(2, at(2099, 1, 1)), guns_n_petals()),
        ];

        let detail = VenueDetail::format(fillmore(), shows, at(2024, 6, 1));

        assert_eq!(detail.past_shows_count, 1);
        assert_eq!(detail.upcoming_shows_count, 1);
        assert_eq!(detail.past_shows[0].start_time, at(2019, 5, 21));
        assert_eq!(
            detail.upcoming_shows[0],
            ArtistAppearance {
                artist_id: 4,
                artist_name: "Guns N Petals".to_string(),
                artist_image_link: Some("https://images.example/gnp.jpg".to_string()),
                start_time: at(2099, 1, 1),
            }
        );
    }

    #[test]
    fn test_artist_detail_carries_venue_side() {
        let shows = vec![(show(2, at(2099, 1, 1)), fillmore())];

        let detail = ArtistDetail::format(guns_n_petals(), shows, at(2024, 6, 1));

        assert_eq!(detail.genres, vec!["Rock n Roll".to_string()]);
        assert!(detail.past_shows.is_empty());
        assert_eq!(detail.upcoming_shows_count, 1);
        assert_eq!(detail.upcoming_shows[0].venue_name, "The Fillmore");
        assert_eq!(detail.upcoming_shows[0].venue_id, 1);
    }

    #[test]
    fn test_search_results_count_matches_data() {
        let results = SearchResults::new(vec![SearchHit {
            id: 1,
            name: "The Fillmore".to_string(),
            num_upcoming_shows: 0,
        }]);
        assert_eq!(results.count, 1);
        assert_eq!(SearchResults::new(vec![]).count, 0);
    }
}
