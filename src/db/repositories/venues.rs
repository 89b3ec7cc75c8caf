use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
};

use super::name_matches;
use crate::db::entities::{artist, show, venue};
use crate::error::{AppError, Result};

/// Venue queries, usable on the pool or inside a transaction
pub struct VenueRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> VenueRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<venue::Model>> {
        Ok(venue::Entity::find_by_id(id).one(self.conn).await?)
    }

    pub async fn exists(&self, id: i32) -> Result<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Every venue with its shows, in insertion order
    pub async fn all_with_shows(&self) -> Result<Vec<(venue::Model, Vec<show::Model>)>> {
        Ok(venue::Entity::find()
            .order_by_asc(venue::Column::Id)
            .find_with_related(show::Entity)
            .all(self.conn)
            .await?)
    }

    pub async fn search_by_name(
        &self,
        term: &str,
    ) -> Result<Vec<(venue::Model, Vec<show::Model>)>> {
        Ok(venue::Entity::find()
            .filter(name_matches((venue::Entity, venue::Column::Name), term))
            .order_by_asc(venue::Column::Id)
            .find_with_related(show::Entity)
            .all(self.conn)
            .await?)
    }

    /// Shows booked at a venue, earliest first, each with its artist
    pub async fn shows_with_artists(
        &self,
        venue_id: i32,
    ) -> Result<Vec<(show::Model, artist::Model)>> {
        let rows = show::Entity::find()
            .filter(show::Column::VenueId.eq(venue_id))
            .order_by_asc(show::Column::StartTime)
            .find_also_related(artist::Entity)
            .all(self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(show, artist)| artist.map(|a| (show, a)))
            .collect())
    }

    pub async fn create(&self, venue: venue::ActiveModel) -> Result<venue::Model> {
        Ok(venue.insert(self.conn).await?)
    }

    pub async fn update(&self, venue: venue::ActiveModel) -> Result<venue::Model> {
        Ok(venue.update(self.conn).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = venue::Entity::delete_by_id(id).exec(self.conn).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Venue {} not found", id)));
        }
        Ok(())
    }
}
