//! Submitted form payloads and the rules they must satisfy.
//!
//! Each form deserializes the raw urlencoded body (unknown fields are
//! rejected), and `validate` maps it onto an explicit changes record naming
//! every column a submission may touch. The primary key is never part of it.

mod artist;
mod fields;
mod show;
mod venue;

pub use artist::{ArtistChanges, ArtistForm};
pub use fields::{FormErrors, GENRE_CHOICES, STATE_CHOICES};
pub use show::ShowForm;
pub use venue::{VenueChanges, VenueForm};

use serde::Deserialize;

/// Body of the search boxes on the venue and artist indexes
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub search_term: String,
}
