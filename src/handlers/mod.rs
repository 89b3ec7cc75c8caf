pub mod artists;
pub mod pages;
pub mod shows;
pub mod venues;

use axum::{
    extract::Path,
    routing::{get, post},
    Router,
};
use axum_extra::extract::WithRejection;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::{error::AppError, state::AppState};

/// A numeric `:id` segment; anything that does not parse as one is a 404
pub type RecordId = WithRejection<Path<i32>, AppError>;

pub fn html_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))

        // Venues
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", post(venues::search_venues))
        .route(
            "/venues/create",
            get(venues::create_venue_form).post(venues::create_venue_submission),
        )
        .route(
            "/venues/:id",
            get(venues::show_venue).delete(venues::delete_venue),
        )
        .route(
            "/venues/:id/edit",
            get(venues::edit_venue_form).post(venues::edit_venue_submission),
        )

        // Artists
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", post(artists::search_artists))
        .route(
            "/artists/create",
            get(artists::create_artist_form).post(artists::create_artist_submission),
        )
        .route(
            "/artists/:id",
            get(artists::show_artist).delete(artists::delete_artist),
        )
        .route(
            "/artists/:id/edit",
            get(artists::edit_artist_form).post(artists::edit_artist_submission),
        )

        // Shows
        .route("/shows", get(shows::list_shows))
        .route(
            "/shows/create",
            get(shows::create_show_form).post(shows::create_show_submission),
        )
}

/// The full application: pages, static assets, the 404 fallback and middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(html_routes())
        .nest_service("/static", ServeDir::new("static"))
        .fallback(pages::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
