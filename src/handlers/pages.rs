use axum::{http::StatusCode, response::Html};

use crate::templates::{home_page, not_found_page};

pub async fn index() -> Html<String> {
    Html(home_page(None).into_string())
}

/// Fallback for every path no route claims
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(not_found_page().into_string()))
}
