use chrono::NaiveDateTime;
use serde::Serialize;

use crate::db::entities::{show, venue};

use super::schedule;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueListing {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// All venues sharing one `(city, state)` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueListing>,
}

/// Group venues by `(city, state)`.
///
/// Input is sorted on the composite key and then cut into contiguous runs, so
/// every venue lands in exactly one area. The sort is stable: venues inside an
/// area keep the order they were loaded in.
pub fn group_by_area(
    mut venues: Vec<(venue::Model, Vec<show::Model>)>,
    now: NaiveDateTime,
) -> Vec<Area> {
    venues.sort_by(|(a, _), (b, _)| (&a.city, &a.state).cmp(&(&b.city, &b.state)));

    let mut areas: Vec<Area> = Vec::new();
    for (venue, shows) in venues {
        let listing = VenueListing {
            id: venue.id,
            name: venue.name,
            num_upcoming_shows: schedule::count_upcoming(shows.iter().map(|s| s.start_time), now),
        };

        match areas.last_mut() {
            Some(area) if area.city == venue.city && area.state == venue.state => {
                area.venues.push(listing);
            }
            _ => areas.push(Area {
                city: venue.city,
                state: venue.state,
                venues: vec![listing],
            }),
        }
    }

    areas
}
