use maud::{html, Markup};

use super::components::{
    delete_button, genre_tags, notification, search_form, show_card, show_section, Notice,
};
use super::layout::base_layout;
use crate::services::{
    areas::Area,
    formatted::{
        ArtistAppearance, ArtistDetail, ArtistListing, SearchResults, ShowListing,
        VenueAppearance, VenueDetail,
    },
    schedule::{format_datetime, DateStyle},
};

pub fn home_page(notice: Option<&Notice>) -> Markup {
    base_layout(
        "Home",
        html! {
            div id="notification-area" class="mb-4" {
                @if let Some(notice) = notice {
                    (notification(notice))
                }
            }

            div class="text-center py-12" {
                h1 class="text-4xl font-bold text-gray-900" { "Stagebook" }
                p class="text-gray-600 mt-4" {
                    "Find a venue, find an artist, book the show."
                }
                div class="mt-8 flex justify-center space-x-3" {
                    a href="/venues/create" class="px-4 py-2 bg-primary hover:bg-green-600 text-white font-semibold rounded-md" {
                        "Post a venue"
                    }
                    a href="/artists/create" class="px-4 py-2 bg-primary hover:bg-green-600 text-white font-semibold rounded-md" {
                        "Post an artist"
                    }
                    a href="/shows/create" class="px-4 py-2 bg-primary hover:bg-green-600 text-white font-semibold rounded-md" {
                        "Post a show"
                    }
                }
            }
        },
    )
}

pub fn venues_page(areas: &[Area]) -> Markup {
    base_layout(
        "Venues",
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-8" { "Venues" }

            (search_form("/venues/search", "Find a venue", ""))

            @if areas.is_empty() {
                p class="text-gray-600 text-lg" { "No venues listed yet." }
            }

            @for area in areas {
                section class="mb-8" {
                    h2 class="text-xl font-semibold mb-2" { (area.city) ", " (area.state) }
                    ul class="space-y-1" {
                        @for venue in &area.venues {
                            li {
                                a href={(format!("/venues/{}", venue.id))} class="hover:underline" {
                                    (venue.name)
                                }
                                span class="ml-2 text-xs text-gray-500" {
                                    (venue.num_upcoming_shows) " upcoming"
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn artists_page(artists: &[ArtistListing]) -> Markup {
    base_layout(
        "Artists",
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-8" { "Artists" }

            (search_form("/artists/search", "Find an artist", ""))

            @if artists.is_empty() {
                p class="text-gray-600 text-lg" { "No artists listed yet." }
            } @else {
                ul class="space-y-1" {
                    @for artist in artists {
                        li {
                            a href={(format!("/artists/{}", artist.id))} class="hover:underline" {
                                (artist.name)
                            }
                        }
                    }
                }
            }
        },
    )
}

/// Results page shared by the venue and artist searches; `kind` is the
/// plural path segment ("venues" or "artists").
pub fn search_results_page(kind: &str, term: &str, results: &SearchResults) -> Markup {
    let action = format!("/{}/search", kind);

    base_layout(
        "Search",
        html! {
            (search_form(&action, "Search again", term))

            h2 class="text-xl font-semibold mb-4" {
                "Number of search results for \"" (term) "\": " (results.count)
            }

            ul class="space-y-1" {
                @for hit in &results.data {
                    li {
                        a href={(format!("/{}/{}", kind, hit.id))} class="hover:underline" {
                            (hit.name)
                        }
                        span class="ml-2 text-xs text-gray-500" {
                            (hit.num_upcoming_shows) " upcoming"
                        }
                    }
                }
            }
        },
    )
}

pub fn venue_detail_page(venue: &VenueDetail) -> Markup {
    let cards = |shows: &[ArtistAppearance]| -> Vec<Markup> {
        shows
            .iter()
            .map(|s| {
                show_card(
                    &format!("/artists/{}", s.artist_id),
                    &s.artist_name,
                    s.artist_image_link.as_deref(),
                    s.start_time,
                )
            })
            .collect()
    };

    base_layout(
        &venue.name,
        html! {
            div class="bg-white rounded-lg shadow-sm p-6" {
                p class="text-sm text-gray-500" { "ID: " (venue.id) }
                h1 class="text-3xl font-bold text-gray-900" { (venue.name) }
                div class="mt-2" { (genre_tags(&venue.genres)) }

                dl class="mt-6 space-y-2 text-gray-700" {
                    dt class="sr-only" { "Location" }
                    dd { (venue.address) ", " (venue.city) ", " (venue.state) }
                    @if let Some(phone) = &venue.phone {
                        dt class="sr-only" { "Phone" }
                        dd { (phone) }
                    }
                    @if let Some(website) = &venue.website {
                        dt class="sr-only" { "Website" }
                        dd { a href=(website) target="_blank" class="text-primary hover:underline" { (website) } }
                    }
                    @if let Some(facebook) = &venue.facebook_link {
                        dt class="sr-only" { "Facebook" }
                        dd { a href=(facebook) target="_blank" class="text-primary hover:underline" { (facebook) } }
                    }
                }

                div class="mt-6" {
                    @if venue.seeking_talent {
                        p class="font-semibold text-green-700" { "Currently seeking talent" }
                        @if let Some(description) = &venue.seeking_description {
                            p class="text-gray-600" { (description) }
                        }
                    } @else {
                        p class="text-gray-500" { "Not currently seeking talent" }
                    }
                }

                @if let Some(image) = &venue.image_link {
                    img src=(image) alt=(venue.name) class="mt-6 w-full md:w-96 rounded-lg shadow-md";
                }

                div class="mt-6 flex flex-wrap gap-3" {
                    a href={(format!("/venues/{}/edit", venue.id))} class="px-4 py-2 bg-blue-500 hover:bg-blue-600 text-white font-semibold rounded-md" {
                        "Edit"
                    }
                    (delete_button(&format!("/venues/{}", venue.id), "Delete venue"))
                }
            }

            (show_section("Upcoming", venue.upcoming_shows_count, cards(&venue.upcoming_shows)))
            (show_section("Past", venue.past_shows_count, cards(&venue.past_shows)))
        },
    )
}

pub fn artist_detail_page(artist: &ArtistDetail) -> Markup {
    let cards = |shows: &[VenueAppearance]| -> Vec<Markup> {
        shows
            .iter()
            .map(|s| {
                show_card(
                    &format!("/venues/{}", s.venue_id),
                    &s.venue_name,
                    s.venue_image_link.as_deref(),
                    s.start_time,
                )
            })
            .collect()
    };

    base_layout(
        &artist.name,
        html! {
            div class="bg-white rounded-lg shadow-sm p-6" {
                p class="text-sm text-gray-500" { "ID: " (artist.id) }
                h1 class="text-3xl font-bold text-gray-900" { (artist.name) }
                div class="mt-2" { (genre_tags(&artist.genres)) }

                dl class="mt-6 space-y-2 text-gray-700" {
                    dt class="sr-only" { "Location" }
                    dd { (artist.city) ", " (artist.state) }
                    @if let Some(phone) = &artist.phone {
                        dt class="sr-only" { "Phone" }
                        dd { (phone) }
                    }
                    @if let Some(website) = &artist.website {
                        dt class="sr-only" { "Website" }
                        dd { a href=(website) target="_blank" class="text-primary hover:underline" { (website) } }
                    }
                    @if let Some(facebook) = &artist.facebook_link {
                        dt class="sr-only" { "Facebook" }
                        dd { a href=(facebook) target="_blank" class="text-primary hover:underline" { (facebook) } }
                    }
                }

                div class="mt-6" {
                    @if artist.seeking_venues {
                        p class="font-semibold text-green-700" { "Currently seeking performance venues" }
                        @if let Some(description) = &artist.seeking_description {
                            p class="text-gray-600" { (description) }
                        }
                    } @else {
                        p class="text-gray-500" { "Not currently seeking performance venues" }
                    }
                }

                @if let Some(image) = &artist.image_link {
                    img src=(image) alt=(artist.name) class="mt-6 w-full md:w-96 rounded-lg shadow-md";
                }

                div class="mt-6 flex flex-wrap gap-3" {
                    a href={(format!("/artists/{}/edit", artist.id))} class="px-4 py-2 bg-blue-500 hover:bg-blue-600 text-white font-semibold rounded-md" {
                        "Edit"
                    }
                    (delete_button(&format!("/artists/{}", artist.id), "Delete artist"))
                }
            }

            (show_section("Upcoming", artist.upcoming_shows_count, cards(&artist.upcoming_shows)))
            (show_section("Past", artist.past_shows_count, cards(&artist.past_shows)))
        },
    )
}

pub fn shows_page(shows: &[ShowListing]) -> Markup {
    base_layout(
        "Shows",
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-8" { "Shows" }

            @if shows.is_empty() {
                p class="text-gray-600 text-lg" { "No shows booked yet." }
            } @else {
                div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6" {
                    @for show in shows {
                        div class="bg-white rounded-lg shadow-md overflow-hidden" {
                            @if let Some(image) = &show.artist_image_link {
                                img src=(image) alt=(show.artist_name) class="w-full h-40 object-cover" loading="lazy";
                            }
                            div class="p-4" {
                                p class="text-xs text-gray-500" {
                                    (format_datetime(show.start_time, DateStyle::Medium))
                                }
                                a href={(format!("/artists/{}", show.artist_id))} class="font-semibold text-gray-900 hover:underline" {
                                    (show.artist_name)
                                }
                                p class="text-sm text-gray-600" {
                                    "playing at "
                                    a href={(format!("/venues/{}", show.venue_id))} class="hover:underline" {
                                        (show.venue_name)
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn not_found_page() -> Markup {
    base_layout(
        "Not Found",
        html! {
            div class="text-center py-12" {
                h1 class="text-4xl font-bold text-gray-900" { "404" }
                p class="text-gray-600 mt-4" { "Not Found" }
                a href="/" class="text-primary hover:underline mt-6 inline-block" { "Back home" }
            }
        },
    )
}

pub fn server_error_page() -> Markup {
    base_layout(
        "Server Error",
        html! {
            div class="text-center py-12" {
                h1 class="text-4xl font-bold text-gray-900" { "500" }
                p class="text-gray-600 mt-4" { "Something went wrong. Please try again." }
                a href="/" class="text-primary hover:underline mt-6 inline-block" { "Back home" }
            }
        },
    )
}
