use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
};

use super::name_matches;
use crate::db::entities::{artist, show, venue};
use crate::error::{AppError, Result};

pub struct ArtistRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ArtistRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<artist::Model>> {
        Ok(artist::Entity::find_by_id(id).one(self.conn).await?)
    }

    pub async fn exists(&self, id: i32) -> Result<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    pub async fn all_by_name(&self) -> Result<Vec<artist::Model>> {
        Ok(artist::Entity::find()
            .order_by_asc(artist::Column::Name)
            .order_by_asc(artist::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn search_by_name(
        &self,
        term: &str,
    ) -> Result<Vec<(artist::Model, Vec<show::Model>)>> {
        Ok(artist::Entity::find()
            .filter(name_matches((artist::Entity, artist::Column::Name), term))
            .order_by_asc(artist::Column::Id)
            .find_with_related(show::Entity)
            .all(self.conn)
            .await?)
    }

    /// Shows an artist is booked for, earliest first, each with its venue
    pub async fn shows_with_venues(
        &self,
        artist_id: i32,
    ) -> Result<Vec<(show::Model, venue::Model)>> {
        let rows = show::Entity::find()
            .filter(show::Column::ArtistId.eq(artist_id))
            .order_by_asc(show::Column::StartTime)
            .find_also_related(venue::Entity)
            .all(self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(show, venue)| venue.map(|v| (show, v)))
            .collect())
    }

    pub async fn create(&self, artist: artist::ActiveModel) -> Result<artist::Model> {
        Ok(artist.insert(self.conn).await?)
    }

    pub async fn update(&self, artist: artist::ActiveModel) -> Result<artist::Model> {
        Ok(artist.update(self.conn).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = artist::Entity::delete_by_id(id).exec(self.conn).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Artist {} not found", id)));
        }
        Ok(())
    }
}
