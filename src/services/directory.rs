//! Read-side queries behind the listing, search and detail pages.
//!
//! Every function takes the reference instant explicitly so the past/upcoming
//! split is decided once per request.

use chrono::NaiveDateTime;
use sea_orm::ConnectionTrait;

use crate::{
    db::repositories::{ArtistRepository, ShowRepository, VenueRepository},
    error::Result,
};

use super::{
    areas::{self, Area},
    formatted::{
        ArtistDetail, ArtistListing, SearchHit, SearchResults, ShowListing, VenueDetail,
    },
    schedule,
};

pub async fn venue_areas<C: ConnectionTrait>(conn: &C, now: NaiveDateTime) -> Result<Vec<Area>> {
    let venues = VenueRepository::new(conn).all_with_shows().await?;
    Ok(areas::group_by_area(venues, now))
}

pub async fn search_venues<C: ConnectionTrait>(
    conn: &C,
    term: &str,
    now: NaiveDateTime,
) -> Result<SearchResults> {
    let rows = VenueRepository::new(conn).search_by_name(term).await?;
    let hits = rows
        .into_iter()
        .map(|(venue, shows)| SearchHit {
            id: venue.id,
            name: venue.name,
            num_upcoming_shows: schedule::count_upcoming(shows.iter().map(|s| s.start_time), now),
        })
        .collect();
    Ok(SearchResults::new(hits))
}

pub async fn venue_detail<C: ConnectionTrait>(
    conn: &C,
    venue_id: i32,
    now: NaiveDateTime,
) -> Result<Option<VenueDetail>> {
    let repo = VenueRepository::new(conn);
    let Some(venue) = repo.find_by_id(venue_id).await? else {
        return Ok(None);
    };
    let shows = repo.shows_with_artists(venue_id).await?;
    Ok(Some(VenueDetail::format(venue, shows, now)))
}

pub async fn artist_listings<C: ConnectionTrait>(conn: &C) -> Result<Vec<ArtistListing>> {
    let artists = ArtistRepository::new(conn).all_by_name().await?;
    Ok(artists
        .into_iter()
        .map(|a| ArtistListing {
            id: a.id,
            name: a.name,
        })
        .collect())
}

pub async fn search_artists<C: ConnectionTrait>(
    conn: &C,
    term: &str,
    now: NaiveDateTime,
) -> Result<SearchResults> {
    let rows = ArtistRepository::new(conn).search_by_name(term).await?;
    let hits = rows
        .into_iter()
        .map(|(artist, shows)| SearchHit {
            id: artist.id,
            name: artist.name,
            num_upcoming_shows: schedule::count_upcoming(shows.iter().map(|s| s.start_time), now),
        })
        .collect();
    Ok(SearchResults::new(hits))
}

pub async fn artist_detail<C: ConnectionTrait>(
    conn: &C,
    artist_id: i32,
    now: NaiveDateTime,
) -> Result<Option<ArtistDetail>> {
    let repo = ArtistRepository::new(conn);
    let Some(artist) = repo.find_by_id(artist_id).await? else {
        return Ok(None);
    };
    let shows = repo.shows_with_venues(artist_id).await?;
    Ok(Some(ArtistDetail::format(artist, shows, now)))
}

pub async fn show_listings<C: ConnectionTrait>(conn: &C) -> Result<Vec<ShowListing>> {
    let rows = ShowRepository::new(conn).all_newest_first().await?;
    Ok(rows
        .into_iter()
        .map(|(show, venue, artist)| ShowListing::format(show, venue, artist))
        .collect())
}
