use chrono::NaiveDateTime;
use serde::Deserialize;

use super::fields::{self, FormErrors};
use crate::db::repositories::NewShow;

const START_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    /// Blank booking form with the start time pre-filled
    pub fn starting_at(start_time: NaiveDateTime) -> Self {
        Self {
            start_time: start_time.format(START_TIME_FORMATS[0]).to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<NewShow, FormErrors> {
        let mut errors = FormErrors::default();

        let artist_id = parse_id(&mut errors, "artist_id", &self.artist_id);
        let venue_id = parse_id(&mut errors, "venue_id", &self.venue_id);
        let start_time = parse_start_time(&mut errors, &self.start_time);

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) if errors.is_empty() => {
                Ok(NewShow {
                    artist_id,
                    venue_id,
                    start_time,
                })
            }
            _ => Err(errors),
        }
    }
}

fn parse_id(errors: &mut FormErrors, field: &'static str, value: &str) -> Option<i32> {
    let value = fields::required(errors, field, value);
    if value.is_empty() {
        return None;
    }
    match value.parse::<i32>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add(field, "Not a valid integer value.");
            None
        }
    }
}

fn parse_start_time(errors: &mut FormErrors, value: &str) -> Option<NaiveDateTime> {
    let value = fields::required(errors, "start_time", value);
    if value.is_empty() {
        return None;
    }
    let parsed = START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&value, format).ok());
    if parsed.is_none() {
        errors.add("start_time", "Not a valid datetime value.");
    }
    parsed
}
