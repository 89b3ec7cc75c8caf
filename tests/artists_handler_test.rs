//! Integration tests for artist routes

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use sea_orm::{ConnectionTrait, EntityTrait};
use tower::util::ServiceExt;

use stagebook::db::entities::Artist;
use stagebook::forms::GENRE_CHOICES;
use stagebook::handlers;
use stagebook::services::{directory, schedule};
use stagebook::state::AppState;
use stagebook::test_utils::*;

fn create_test_router(state: &AppState) -> Router {
    handlers::router(state.clone())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn test_list_artists_ordered_by_name() {
    let state = setup_test_app_state().await;
    create_test_artist(&state.db, "The Wild Sax Band").await;
    create_test_artist(&state.db, "Guns N Petals").await;
    create_test_artist(&state.db, "Matt Quevedo").await;

    let listings = directory::artist_listings(&state.db).await.unwrap();
    let names: Vec<&str> = listings.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"]);

    let response = create_test_router(&state)
        .oneshot(get("/artists"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    let guns = body.find("Guns N Petals").unwrap();
    let sax = body.find("The Wild Sax Band").unwrap();
    assert!(guns < sax);
}

#[tokio::test]
async fn test_search_artists_is_case_insensitive() {
    let state = setup_test_app_state().await;
    create_test_artist(&state.db, "Guns N Petals").await;
    create_test_artist(&state.db, "Matt Quevedo").await;
    create_test_artist(&state.db, "The Wild Sax Band").await;

    let results = directory::search_artists(&state.db, "A", schedule::now())
        .await
        .unwrap();
    assert_eq!(results.count, 3);

    let results = directory::search_artists(&state.db, "band", schedule::now())
        .await
        .unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].name, "The Wild Sax Band");

    let response = create_test_router(&state)
        .oneshot(form_post("/artists/search", "search_term=PETALS"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Number of search results for &quot;PETALS&quot;: 1"));
    assert!(body.contains("Guns N Petals"));
}

#[tokio::test]
async fn test_search_artists_without_match() {
    let state = setup_test_app_state().await;
    create_test_artist(&state.db, "Guns N Petals").await;

    let response = create_test_router(&state)
        .oneshot(form_post("/artists/search", "search_term=zzz"))
        .await
        .unwrap();

    let body = body_text(response).await;
    assert!(body.contains("Number of search results for &quot;zzz&quot;: 0"));
}

#[tokio::test]
async fn test_show_artist() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;

    let response = create_test_router(&state)
        .oneshot(get(&format!("/artists/{}", artist.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Guns N Petals"));
    assert!(body.contains("0 Upcoming Shows"));
    assert!(body.contains("0 Past Shows"));
}

#[tokio::test]
async fn test_show_artist_not_found() {
    let state = setup_test_app_state().await;

    let response = create_test_router(&state)
        .oneshot(get("/artists/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_artist() {
    let state = setup_test_app_state().await;

    let response = create_test_router(&state)
        .oneshot(form_post(
            "/artists/create",
            "name=Matt+Quevedo&city=New+York&state=NY&phone=300-400-5000\
             &genres=Jazz&facebook_link=https%3A%2F%2Fwww.facebook.com%2Fmattquevedo",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Artist Matt Quevedo was successfully listed!"));

    let stored = Artist::find().all(&state.db).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].genres, "Jazz");
    assert!(!stored[0].seeking_venues);
    assert_eq!(
        stored[0].facebook_link.as_deref(),
        Some("https://www.facebook.com/mattquevedo")
    );
}

#[tokio::test]
async fn test_create_artist_with_every_genre() {
    let state = setup_test_app_state().await;
    let genres: String = GENRE_CHOICES
        .iter()
        .map(|g| format!("&genres={}", g.replace('&', "%26").replace(' ', "+")))
        .collect();

    let response = create_test_router(&state)
        .oneshot(form_post(
            "/artists/create",
            &format!("name=The+Everything+Band&city=Austin&state=TX{}", genres),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Artist The Everything Band was successfully listed!"));

    let stored = Artist::find().one(&state.db).await.unwrap().unwrap();
    assert_eq!(stored.genre_list(), GENRE_CHOICES.to_vec());
}

#[tokio::test]
async fn test_create_artist_rejects_bad_url() {
    let state = setup_test_app_state().await;

    let response = create_test_router(&state)
        .oneshot(form_post(
            "/artists/create",
            "name=Matt+Quevedo&city=New+York&state=NY&genres=Jazz&website_link=not-a-url",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("Invalid URL."));
    assert!(Artist::find().all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_edit_artist_redirects_to_detail() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;

    let response = create_test_router(&state)
        .oneshot(form_post(
            &format!("/artists/{}/edit", artist.id),
            "name=Guns+N+Roses+N+Petals&city=Los+Angeles&state=CA\
             &genres=Rock&seeking_venues=y&seeking_description=Any+stage",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        &format!("/artists/{}", artist.id)
    );

    let updated = Artist::find_by_id(artist.id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Guns N Roses N Petals");
    assert_eq!(updated.city, "Los Angeles");
    assert!(updated.seeking_venues);
    assert_eq!(updated.image_link, None);
}

#[tokio::test]
async fn test_edit_artist_validation_failure_keeps_row() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;

    let response = create_test_router(&state)
        .oneshot(form_post(
            &format!("/artists/{}/edit", artist.id),
            "name=Renamed&city=Los+Angeles&state=CA&genres=Polka",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("is not a valid choice for this field."));

    let unchanged = Artist::find_by_id(artist.id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.name, "Guns N Petals");
}

#[tokio::test]
async fn test_failed_artist_update_renders_home_with_notice() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    state
        .db
        .execute_unprepared(
            "CREATE TRIGGER artists_locked BEFORE UPDATE ON artists \
             BEGIN SELECT RAISE(ABORT, 'artists are locked'); END;",
        )
        .await
        .unwrap();

    let response = create_test_router(&state)
        .oneshot(form_post(
            &format!("/artists/{}/edit", artist.id),
            "name=Guns+N+Roses&city=Los+Angeles&state=CA&genres=Rock",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(&format!(
        "An error occurred. Artist {} could not be updated.",
        artist.id
    )));

    let unchanged = Artist::find_by_id(artist.id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.name, "Guns N Petals");
}

#[tokio::test]
async fn test_malformed_artist_id_is_not_found() {
    let state = setup_test_app_state().await;

    for uri in ["/artists/abc", "/artists/99999999999", "/artists/-/edit"] {
        let response = create_test_router(&state).oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {}", uri);
    }

    let response = create_test_router(&state)
        .oneshot(form_post(
            "/artists/abc/edit",
            "name=Nobody&city=Austin&state=TX&genres=Rock",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_missing_artist_is_not_found() {
    let state = setup_test_app_state().await;

    let response = create_test_router(&state)
        .oneshot(form_post(
            "/artists/12/edit",
            "name=Nobody&city=Austin&state=TX&genres=Rock",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_artist_then_lookup_is_not_found() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;

    let response = create_test_router(&state)
        .oneshot(delete(&format!("/artists/{}", artist.id)))
        .await
        .unwrap();
    let body = body_text(response).await;
    assert!(body.contains(&format!("Artist ID {} deleted.", artist.id)));

    let detail = directory::artist_detail(&state.db, artist.id, schedule::now())
        .await
        .unwrap();
    assert!(detail.is_none());
}

#[tokio::test]
async fn test_delete_booked_artist_is_refused() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    let start = NaiveDate::from_ymd_opt(2019, 5, 21)
        .unwrap()
        .and_hms_opt(21, 30, 0)
        .unwrap();
    create_test_show(&state.db, artist.id, venue.id, start).await;

    let response = create_test_router(&state)
        .oneshot(delete(&format!("/artists/{}", artist.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(&format!("Failed to delete Artist ID {}.", artist.id)));

    let detail = directory::artist_detail(&state.db, artist.id, schedule::now())
        .await
        .unwrap()
        .expect("artist should survive");
    assert_eq!(detail.past_shows_count, 1);
}
