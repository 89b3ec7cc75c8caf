use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::{Form, WithRejection};
use sea_orm::TransactionTrait;

use super::RecordId;
use crate::{
    db::{entities::artist, repositories::ArtistRepository},
    error::{AppError, Result},
    forms::{ArtistForm, FormErrors, SearchForm},
    services::{directory, schedule},
    state::AppState,
    templates::{
        artist_detail_page, artist_form_page, artists_page, home_page, search_results_page,
        FormMode, Notice,
    },
};

fn not_found(artist_id: i32) -> AppError {
    AppError::NotFound(format!("Artist {} not found", artist_id))
}

fn form_response(status: StatusCode, form: &ArtistForm, errors: &FormErrors, mode: FormMode) -> Response {
    (status, Html(artist_form_page(form, errors, mode).into_string())).into_response()
}

fn home_with(notice: Notice) -> Response {
    Html(home_page(Some(&notice)).into_string()).into_response()
}

pub async fn list_artists(State(state): State<AppState>) -> Result<Html<String>> {
    let artists = directory::artist_listings(&state.db).await?;
    Ok(Html(artists_page(&artists).into_string()))
}

pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>> {
    let results = directory::search_artists(&state.db, &form.search_term, schedule::now()).await?;
    tracing::debug!(
        "Artist search for {:?} matched {} artists",
        form.search_term,
        results.count
    );
    Ok(Html(
        search_results_page("artists", &form.search_term, &results).into_string(),
    ))
}

pub async fn show_artist(
    State(state): State<AppState>,
    WithRejection(Path(artist_id), _): RecordId,
) -> Result<Html<String>> {
    let detail = directory::artist_detail(&state.db, artist_id, schedule::now())
        .await?
        .ok_or_else(|| not_found(artist_id))?;
    Ok(Html(artist_detail_page(&detail).into_string()))
}

pub async fn create_artist_form() -> Response {
    form_response(
        StatusCode::OK,
        &ArtistForm::default(),
        &FormErrors::default(),
        FormMode::Create,
    )
}

pub async fn create_artist_submission(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> Response {
    let changes = match form.validate() {
        Ok(changes) => changes,
        Err(errors) => {
            tracing::warn!("Rejected artist submission: {:?}", errors);
            return form_response(StatusCode::UNPROCESSABLE_ENTITY, &form, &errors, FormMode::Create);
        }
    };

    let name = changes.name.clone();
    let created = state
        .db
        .transaction::<_, artist::Model, AppError>(move |txn| {
            Box::pin(async move {
                ArtistRepository::new(txn)
                    .create(changes.into_active_model())
                    .await
            })
        })
        .await
        .map_err(AppError::from);

    match created {
        Ok(artist) => {
            tracing::info!("Listed artist {} ({})", artist.id, artist.name);
            home_with(Notice::success(format!(
                "Artist {} was successfully listed!",
                artist.name
            )))
        }
        Err(e) => {
            tracing::error!("Failed to list artist {}: {}", name, e);
            home_with(Notice::error(format!(
                "An error occurred. Artist {} could not be listed.",
                name
            )))
        }
    }
}

pub async fn edit_artist_form(
    State(state): State<AppState>,
    WithRejection(Path(artist_id), _): RecordId,
) -> Result<Response> {
    let artist = ArtistRepository::new(&state.db)
        .find_by_id(artist_id)
        .await?
        .ok_or_else(|| not_found(artist_id))?;

    Ok(form_response(
        StatusCode::OK,
        &ArtistForm::from_model(&artist),
        &FormErrors::default(),
        FormMode::Edit { id: artist_id },
    ))
}

pub async fn edit_artist_submission(
    State(state): State<AppState>,
    WithRejection(Path(artist_id), _): RecordId,
    Form(form): Form<ArtistForm>,
) -> Result<Response> {
    let artist = ArtistRepository::new(&state.db)
        .find_by_id(artist_id)
        .await?
        .ok_or_else(|| not_found(artist_id))?;

    let changes = match form.validate() {
        Ok(changes) => changes,
        Err(errors) => {
            tracing::warn!("Rejected edit of artist {}: {:?}", artist_id, errors);
            return Ok(form_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                &form,
                &errors,
                FormMode::Edit { id: artist_id },
            ));
        }
    };

    let updated = state
        .db
        .transaction::<_, artist::Model, AppError>(move |txn| {
            Box::pin(async move {
                let mut active: artist::ActiveModel = artist.into();
                changes.apply_to(&mut active);
                ArtistRepository::new(txn).update(active).await
            })
        })
        .await
        .map_err(AppError::from);

    match updated {
        Ok(_) => {
            tracing::info!("Updated artist {}", artist_id);
            Ok(Redirect::to(&format!("/artists/{}", artist_id)).into_response())
        }
        Err(e) => {
            tracing::error!("Failed to update artist {}: {}", artist_id, e);
            Ok(home_with(Notice::error(format!(
                "An error occurred. Artist {} could not be updated.",
                artist_id
            ))))
        }
    }
}

pub async fn delete_artist(
    State(state): State<AppState>,
    WithRejection(Path(artist_id), _): RecordId,
) -> Response {
    let deleted = state
        .db
        .transaction::<_, (), AppError>(move |txn| {
            Box::pin(async move { ArtistRepository::new(txn).delete(artist_id).await })
        })
        .await
        .map_err(AppError::from);

    match deleted {
        Ok(()) => {
            tracing::info!("Deleted artist {}", artist_id);
            home_with(Notice::success(format!("Artist ID {} deleted.", artist_id)))
        }
        Err(e) => {
            tracing::error!("Failed to delete artist {}: {}", artist_id, e);
            home_with(Notice::error(format!("Failed to delete Artist ID {}.", artist_id)))
        }
    }
}
