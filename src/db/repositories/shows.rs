use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, LoaderTrait, QueryOrder, Set};

use super::{ArtistRepository, VenueRepository};
use crate::db::entities::{artist, show, venue};
use crate::error::{AppError, Result};

/// A validated show booking, not yet checked against the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: NaiveDateTime,
}

pub struct ShowRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ShowRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// All shows, latest start time first, with both parties loaded
    pub async fn all_newest_first(
        &self,
    ) -> Result<Vec<(show::Model, venue::Model, artist::Model)>> {
        let shows = show::Entity::find()
            .order_by_desc(show::Column::StartTime)
            .order_by_desc(show::Column::Id)
            .all(self.conn)
            .await?;

        let venues = shows.load_one(venue::Entity, self.conn).await?;
        let artists = shows.load_one(artist::Entity, self.conn).await?;

        Ok(shows
            .into_iter()
            .zip(venues)
            .zip(artists)
            .filter_map(|((show, venue), artist)| Some((show, venue?, artist?)))
            .collect())
    }

    /// Insert a show once both referenced rows are known to exist.
    ///
    /// Nothing is written when either id is missing; the error lists every
    /// missing reference. The foreign keys still guard the insert itself.
    pub async fn create_checked(&self, new_show: NewShow) -> Result<show::Model> {
        let mut missing = Vec::new();
        if !ArtistRepository::new(self.conn).exists(new_show.artist_id).await? {
            missing.push(format!("Artist ID {} does not exist", new_show.artist_id));
        }
        if !VenueRepository::new(self.conn).exists(new_show.venue_id).await? {
            missing.push(format!("Venue ID {} does not exist", new_show.venue_id));
        }
        if !missing.is_empty() {
            return Err(AppError::InvalidReference(missing));
        }

        let show = show::ActiveModel {
            artist_id: Set(new_show.artist_id),
            venue_id: Set(new_show.venue_id),
            start_time: Set(new_show.start_time),
            ..Default::default()
        };
        Ok(show.insert(self.conn).await?)
    }
}
