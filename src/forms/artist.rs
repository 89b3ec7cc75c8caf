use sea_orm::Set;
use serde::Deserialize;

use super::fields::{self, FormErrors};
use crate::db::{entities::artist, genres};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_venues: Option<String>,
    pub seeking_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistChanges {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venues: bool,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn from_model(artist: &artist::Model) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            genres: artist.genre_list(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            website_link: artist.website_link.clone().unwrap_or_default(),
            seeking_venues: artist.seeking_venues.then(|| "y".to_string()),
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<ArtistChanges, FormErrors> {
        let mut errors = FormErrors::default();

        let changes = ArtistChanges {
            name: fields::required(&mut errors, "name", &self.name),
            city: fields::required(&mut errors, "city", &self.city),
            state: fields::state_code(&mut errors, "state", &self.state),
            phone: fields::optional(&self.phone),
            image_link: fields::optional_url(&mut errors, "image_link", &self.image_link),
            facebook_link: fields::optional_url(&mut errors, "facebook_link", &self.facebook_link),
            website_link: fields::optional_url(&mut errors, "website_link", &self.website_link),
            genres: fields::genre_list(&mut errors, "genres", &self.genres),
            seeking_venues: self.seeking_venues.is_some(),
            seeking_description: fields::optional(&self.seeking_description),
        };

        if errors.is_empty() {
            Ok(changes)
        } else {
            Err(errors)
        }
    }
}

impl ArtistChanges {
    pub fn apply_to(self, artist: &mut artist::ActiveModel) {
        artist.name = Set(self.name);
        artist.city = Set(self.city);
        artist.state = Set(self.state);
        artist.phone = Set(self.phone);
        artist.image_link = Set(self.image_link);
        artist.facebook_link = Set(self.facebook_link);
        artist.website_link = Set(self.website_link);
        artist.genres = Set(genres::join(&self.genres));
        artist.seeking_venues = Set(self.seeking_venues);
        artist.seeking_description = Set(self.seeking_description);
    }

    pub fn into_active_model(self) -> artist::ActiveModel {
        let mut artist = artist::ActiveModel::default();
        self.apply_to(&mut artist);
        artist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_artist_form() {
        let form = ArtistForm {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            genres: vec!["Rock n Roll".to_string()],
            seeking_venues: Some("y".to_string()),
            seeking_description: "Looking for shows to perform at in the San Francisco Bay Area!"
                .to_string(),
            ..Default::default()
        };

        let changes = form.validate().unwrap();
        assert_eq!(changes.genres, vec!["Rock n Roll".to_string()]);
        assert!(changes.seeking_venues);
        assert_eq!(changes.phone, None);
    }

    #[test]
    fn test_artist_form_requires_city_and_genres() {
        let form = ArtistForm {
            name: "The Wild Sax Band".to_string(),
            state: "CA".to_string(),
            ..Default::default()
        };

        let errors = form.validate().unwrap_err();
        assert!(!errors.for_field("city").is_empty());
        assert!(!errors.for_field("genres").is_empty());
        assert!(errors.for_field("name").is_empty());
    }
}
