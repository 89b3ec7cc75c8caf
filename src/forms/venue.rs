use sea_orm::Set;
use serde::Deserialize;

use super::fields::{self, FormErrors};
use crate::db::{entities::venue, genres};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub website_link: String,
    /// Checkbox: present when ticked, whatever its value
    pub seeking_talent: Option<String>,
    pub seeking_description: String,
}

/// Every column a venue submission may set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueChanges {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    /// Pre-fill the edit form from a stored venue
    pub fn from_model(venue: &venue::Model) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            genres: venue.genre_list(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            website_link: venue.website_link.clone().unwrap_or_default(),
            seeking_talent: venue.seeking_talent.then(|| "y".to_string()),
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<VenueChanges, FormErrors> {
        let mut errors = FormErrors::default();

        let changes = VenueChanges {
            name: fields::required(&mut errors, "name", &self.name),
            city: fields::required(&mut errors, "city", &self.city),
            state: fields::state_code(&mut errors, "state", &self.state),
            address: fields::required(&mut errors, "address", &self.address),
            phone: fields::optional(&self.phone),
            image_link: fields::optional_url(&mut errors, "image_link", &self.image_link),
            facebook_link: fields::optional_url(&mut errors, "facebook_link", &self.facebook_link),
            website_link: fields::optional_url(&mut errors, "website_link", &self.website_link),
            genres: fields::genre_list(&mut errors, "genres", &self.genres),
            seeking_talent: self.seeking_talent.is_some(),
            seeking_description: fields::optional(&self.seeking_description),
        };

        if errors.is_empty() {
            Ok(changes)
        } else {
            Err(errors)
        }
    }
}

impl VenueChanges {
    pub fn apply_to(self, venue: &mut venue::ActiveModel) {
        venue.name = Set(self.name);
        venue.city = Set(self.city);
        venue.state = Set(self.state);
        venue.address = Set(self.address);
        venue.phone = Set(self.phone);
        venue.image_link = Set(self.image_link);
        venue.facebook_link = Set(self.facebook_link);
        venue.website_link = Set(self.website_link);
        venue.genres = Set(genres::join(&self.genres));
        venue.seeking_talent = Set(self.seeking_talent);
        venue.seeking_description = Set(self.seeking_description);
    }

    pub fn into_active_model(self) -> venue::ActiveModel {
        let mut venue = venue::ActiveModel::default();
        self.apply_to(&mut venue);
        venue
    }
}
