use chrono::NaiveDateTime;
use maud::{html, Markup};

use crate::services::schedule::{format_datetime, DateStyle};

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x300/1a1a1a/ffffff?text=No+Image";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message shown once on the page a request lands on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

pub fn notification(notice: &Notice) -> Markup {
    let (bg_color, text_color, icon) = match notice.kind {
        NoticeKind::Success => ("bg-green-50", "text-green-800", "✓"),
        NoticeKind::Error => ("bg-red-50", "text-red-800", "✗"),
    };

    html! {
        div class={(format!("p-4 rounded-md {} {}", bg_color, text_color))} role="alert" {
            div class="flex items-center" {
                span class="font-bold mr-2" { (icon) }
                span { (notice.message) }
            }
        }
    }
}

pub fn genre_tags(genres: &[String]) -> Markup {
    html! {
        div class="flex flex-wrap gap-2" {
            @for genre in genres {
                span class="px-2 py-1 bg-gray-100 text-gray-700 text-sm rounded" {
                    (genre)
                }
            }
        }
    }
}

pub fn search_form(action: &str, placeholder: &str, term: &str) -> Markup {
    html! {
        form method="post" action=(action) class="mb-6" {
            input
                type="search"
                name="search_term"
                value=(term)
                placeholder=(placeholder)
                aria-label=(placeholder)
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";
        }
    }
}

/// One show on a detail page: the counterpart's picture, name and the start time
pub fn show_card(href: &str, name: &str, image_link: Option<&str>, start_time: NaiveDateTime) -> Markup {
    html! {
        div class="bg-white rounded-lg shadow-md overflow-hidden" {
            img
                src=(image_link.unwrap_or(PLACEHOLDER_IMAGE))
                alt=(name)
                class="w-full h-40 object-cover"
                loading="lazy";
            div class="p-4" {
                a href=(href) class="font-semibold text-gray-900 hover:underline" { (name) }
                p class="text-xs text-gray-500 mt-1" {
                    (format_datetime(start_time, DateStyle::Full))
                }
            }
        }
    }
}

pub fn show_section(title: &str, count: usize, cards: Vec<Markup>) -> Markup {
    html! {
        section class="mt-8" {
            h2 class="text-xl font-semibold mb-4" {
                (count) " " (title) " " (if count == 1 { "Show" } else { "Shows" })
            }
            @if cards.is_empty() {
                p class="text-gray-500" { "No shows." }
            } @else {
                div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6" {
                    @for card in cards {
                        (card)
                    }
                }
            }
        }
    }
}

pub fn delete_button(url: &str, label: &str) -> Markup {
    html! {
        button
            class="px-4 py-2 bg-red-500 hover:bg-red-600 text-white font-semibold rounded-md"
            hx-delete=(url)
            hx-target="body"
            hx-confirm="Are you sure?" {
            (label)
        }
    }
}

pub fn field_errors(errors: &[String]) -> Markup {
    html! {
        @for error in errors {
            p class="mt-1 text-sm text-red-600" { (error) }
        }
    }
}

pub fn text_field(label: &str, name: &str, value: &str, errors: &[String]) -> Markup {
    html! {
        div {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-2" { (label) }
            input
                type="text"
                id=(name)
                name=(name)
                value=(value)
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";
            (field_errors(errors))
        }
    }
}

pub fn textarea_field(label: &str, name: &str, value: &str, errors: &[String]) -> Markup {
    html! {
        div {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-2" { (label) }
            textarea
                id=(name)
                name=(name)
                rows="3"
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary" {
                (value)
            }
            (field_errors(errors))
        }
    }
}

pub fn select_field(
    label: &str,
    name: &str,
    choices: &[&str],
    selected: &str,
    errors: &[String],
) -> Markup {
    html! {
        div {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-2" { (label) }
            select
                id=(name)
                name=(name)
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary" {
                @for choice in choices {
                    option value=(choice) selected[*choice == selected] { (choice) }
                }
            }
            (field_errors(errors))
        }
    }
}

pub fn multi_select_field(
    label: &str,
    name: &str,
    choices: &[&str],
    selected: &[String],
    errors: &[String],
) -> Markup {
    html! {
        div {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-2" { (label) }
            select
                id=(name)
                name=(name)
                multiple
                size="8"
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary" {
                @for choice in choices {
                    option value=(choice) selected[selected.iter().any(|s| s.as_str() == *choice)] {
                        (choice)
                    }
                }
            }
            (field_errors(errors))
        }
    }
}

pub fn checkbox_field(label: &str, name: &str, checked: bool) -> Markup {
    html! {
        div class="flex items-center space-x-2" {
            input type="checkbox" id=(name) name=(name) value="y" checked[checked];
            label for=(name) class="text-sm font-medium text-gray-700" { (label) }
        }
    }
}
