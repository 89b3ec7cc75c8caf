use maud::{html, Markup};

use super::components::{
    checkbox_field, multi_select_field, notification, select_field, text_field, textarea_field,
    Notice,
};
use super::layout::base_layout;
use crate::forms::{ArtistForm, FormErrors, ShowForm, VenueForm, GENRE_CHOICES, STATE_CHOICES};

/// Whether a form page creates a new record or edits record `id`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: i32 },
}

fn form_shell(title: &str, action: &str, fields: Markup, submit: &str) -> Markup {
    base_layout(
        title,
        html! {
            div class="max-w-3xl mx-auto" {
                h1 class="text-3xl font-bold text-gray-900 mb-8" { (title) }

                form method="post" action=(action) class="bg-white rounded-lg shadow-sm p-6 space-y-4" {
                    (fields)

                    button
                        type="submit"
                        class="px-4 py-2 bg-primary hover:bg-green-600 text-white font-semibold rounded-md" {
                        (submit)
                    }
                }
            }
        },
    )
}

pub fn venue_form_page(form: &VenueForm, errors: &FormErrors, mode: FormMode) -> Markup {
    let (title, action, submit) = match mode {
        FormMode::Create => (
            "List a new venue".to_string(),
            "/venues/create".to_string(),
            "Create Venue",
        ),
        FormMode::Edit { id } => (
            format!("Edit venue {}", form.name),
            format!("/venues/{}/edit", id),
            "Save Venue",
        ),
    };

    let fields = html! {
        (text_field("Name", "name", &form.name, errors.for_field("name")))
        (text_field("City", "city", &form.city, errors.for_field("city")))
        (select_field("State", "state", STATE_CHOICES, &form.state, errors.for_field("state")))
        (text_field("Address", "address", &form.address, errors.for_field("address")))
        (text_field("Phone", "phone", &form.phone, errors.for_field("phone")))
        (multi_select_field("Genres", "genres", GENRE_CHOICES, &form.genres, errors.for_field("genres")))
        (text_field("Image Link", "image_link", &form.image_link, errors.for_field("image_link")))
        (text_field("Facebook Link", "facebook_link", &form.facebook_link, errors.for_field("facebook_link")))
        (text_field("Website Link", "website_link", &form.website_link, errors.for_field("website_link")))
        (checkbox_field("Looking for talent", "seeking_talent", form.seeking_talent.is_some()))
        (textarea_field("Seeking Description", "seeking_description", &form.seeking_description, errors.for_field("seeking_description")))
    };

    form_shell(&title, &action, fields, submit)
}

pub fn artist_form_page(form: &ArtistForm, errors: &FormErrors, mode: FormMode) -> Markup {
    let (title, action, submit) = match mode {
        FormMode::Create => (
            "List a new artist".to_string(),
            "/artists/create".to_string(),
            "Create Artist",
        ),
        FormMode::Edit { id } => (
            format!("Edit artist {}", form.name),
            format!("/artists/{}/edit", id),
            "Save Artist",
        ),
    };

    let fields = html! {
        (text_field("Name", "name", &form.name, errors.for_field("name")))
        (text_field("City", "city", &form.city, errors.for_field("city")))
        (select_field("State", "state", STATE_CHOICES, &form.state, errors.for_field("state")))
        (text_field("Phone", "phone", &form.phone, errors.for_field("phone")))
        (multi_select_field("Genres", "genres", GENRE_CHOICES, &form.genres, errors.for_field("genres")))
        (text_field("Image Link", "image_link", &form.image_link, errors.for_field("image_link")))
        (text_field("Facebook Link", "facebook_link", &form.facebook_link, errors.for_field("facebook_link")))
        (text_field("Website Link", "website_link", &form.website_link, errors.for_field("website_link")))
        (checkbox_field("Looking for venues", "seeking_venues", form.seeking_venues.is_some()))
        (textarea_field("Seeking Description", "seeking_description", &form.seeking_description, errors.for_field("seeking_description")))
    };

    form_shell(&title, &action, fields, submit)
}

pub fn show_form_page(form: &ShowForm, errors: &FormErrors, notice: Option<&Notice>) -> Markup {
    let fields = html! {
        @if let Some(notice) = notice {
            (notification(notice))
        }
        (text_field("Artist ID", "artist_id", &form.artist_id, errors.for_field("artist_id")))
        (text_field("Venue ID", "venue_id", &form.venue_id, errors.for_field("venue_id")))
        (text_field("Start Time", "start_time", &form.start_time, errors.for_field("start_time")))
    };

    form_shell("List a new show", "/shows/create", fields, "Create Show")
}
