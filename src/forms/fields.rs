use std::collections::BTreeMap;

pub const STATE_CHOICES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Accepted genres. None contains the storage delimiter.
pub const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// Validation messages keyed by form field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<&'static str, Vec<String>>,
}

impl FormErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    pub fn for_field(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.fields.values().flatten().map(String::as_str)
    }
}

pub(super) fn required(errors: &mut FormErrors, field: &'static str, value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, "This field is required.");
    }
    value.to_string()
}

pub(super) fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub(super) fn optional_url(
    errors: &mut FormErrors,
    field: &'static str,
    value: &str,
) -> Option<String> {
    let value = optional(value)?;
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => Some(value),
        _ => {
            errors.add(field, "Invalid URL.");
            None
        }
    }
}

pub(super) fn state_code(errors: &mut FormErrors, field: &'static str, value: &str) -> String {
    let value = required(errors, field, value);
    if !value.is_empty() && !STATE_CHOICES.contains(&value.as_str()) {
        errors.add(field, "Not a valid choice.");
    }
    value
}

pub(super) fn genre_list(
    errors: &mut FormErrors,
    field: &'static str,
    values: &[String],
) -> Vec<String> {
    let genres: Vec<String> = values
        .iter()
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
        .collect();

    if genres.is_empty() {
        errors.add(field, "This field is required.");
    }
    for genre in &genres {
        if !GENRE_CHOICES.contains(&genre.as_str()) {
            errors.add(field, format!("'{}' is not a valid choice for this field.", genre));
        }
    }
    genres
}
