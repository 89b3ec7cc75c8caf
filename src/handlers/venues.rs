use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::{Form, WithRejection};
use sea_orm::TransactionTrait;

use super::RecordId;
use crate::{
    db::{entities::venue, repositories::VenueRepository},
    error::{AppError, Result},
    forms::{FormErrors, SearchForm, VenueForm},
    services::{directory, schedule},
    state::AppState,
    templates::{
        home_page, search_results_page, venue_detail_page, venue_form_page, venues_page,
        FormMode, Notice,
    },
};

fn not_found(venue_id: i32) -> AppError {
    AppError::NotFound(format!("Venue {} not found", venue_id))
}

fn form_response(status: StatusCode, form: &VenueForm, errors: &FormErrors, mode: FormMode) -> Response {
    (status, Html(venue_form_page(form, errors, mode).into_string())).into_response()
}

fn home_with(notice: Notice) -> Response {
    Html(home_page(Some(&notice)).into_string()).into_response()
}

pub async fn list_venues(State(state): State<AppState>) -> Result<Html<String>> {
    let areas = directory::venue_areas(&state.db, schedule::now()).await?;
    Ok(Html(venues_page(&areas).into_string()))
}

pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>> {
    let results = directory::search_venues(&state.db, &form.search_term, schedule::now()).await?;
    tracing::debug!(
        "Venue search for {:?} matched {} venues",
        form.search_term,
        results.count
    );
    Ok(Html(
        search_results_page("venues", &form.search_term, &results).into_string(),
    ))
}

pub async fn show_venue(
    State(state): State<AppState>,
    WithRejection(Path(venue_id), _): RecordId,
) -> Result<Html<String>> {
    let detail = directory::venue_detail(&state.db, venue_id, schedule::now())
        .await?
        .ok_or_else(|| not_found(venue_id))?;
    Ok(Html(venue_detail_page(&detail).into_string()))
}

pub async fn create_venue_form() -> Response {
    form_response(
        StatusCode::OK,
        &VenueForm::default(),
        &FormErrors::default(),
        FormMode::Create,
    )
}

pub async fn create_venue_submission(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> Response {
    let changes = match form.validate() {
        Ok(changes) => changes,
        Err(errors) => {
            tracing::warn!("Rejected venue submission: {:?}", errors);
            return form_response(StatusCode::UNPROCESSABLE_ENTITY, &form, &errors, FormMode::Create);
        }
    };

    let name = changes.name.clone();
    let created = state
        .db
        .transaction::<_, venue::Model, AppError>(move |txn| {
            Box::pin(async move {
                VenueRepository::new(txn)
                    .create(changes.into_active_model())
                    .await
            })
        })
        .await
        .map_err(AppError::from);

    match created {
        Ok(venue) => {
            tracing::info!("Listed venue {} ({})", venue.id, venue.name);
            home_with(Notice::success(format!(
                "Venue {} was successfully listed!",
                venue.name
            )))
        }
        Err(e) => {
            tracing::error!("Failed to list venue {}: {}", name, e);
            home_with(Notice::error(format!(
                "An error occurred. Venue {} could not be listed.",
                name
            )))
        }
    }
}

pub async fn edit_venue_form(
    State(state): State<AppState>,
    WithRejection(Path(venue_id), _): RecordId,
) -> Result<Response> {
    let venue = VenueRepository::new(&state.db)
        .find_by_id(venue_id)
        .await?
        .ok_or_else(|| not_found(venue_id))?;

    Ok(form_response(
        StatusCode::OK,
        &VenueForm::from_model(&venue),
        &FormErrors::default(),
        FormMode::Edit { id: venue_id },
    ))
}

pub async fn edit_venue_submission(
    State(state): State<AppState>,
    WithRejection(Path(venue_id), _): RecordId,
    Form(form): Form<VenueForm>,
) -> Result<Response> {
    let venue = VenueRepository::new(&state.db)
        .find_by_id(venue_id)
        .await?
        .ok_or_else(|| not_found(venue_id))?;

    let changes = match form.validate() {
        Ok(changes) => changes,
        Err(errors) => {
            tracing::warn!("Rejected edit of venue {}: {:?}", venue_id, errors);
            return Ok(form_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                &form,
                &errors,
                FormMode::Edit { id: venue_id },
            ));
        }
    };

    let updated = state
        .db
        .transaction::<_, venue::Model, AppError>(move |txn| {
            Box::pin(async move {
                let mut active: venue::ActiveModel = venue.into();
                changes.apply_to(&mut active);
                VenueRepository::new(txn).update(active).await
            })
        })
        .await
        .map_err(AppError::from);

    match updated {
        Ok(_) => {
            tracing::info!("Updated venue {}", venue_id);
            Ok(Redirect::to(&format!("/venues/{}", venue_id)).into_response())
        }
        Err(e) => {
            tracing::error!("Failed to update venue {}: {}", venue_id, e);
            Ok(home_with(Notice::error(format!(
                "An error occurred. Venue {} could not be updated.",
                venue_id
            ))))
        }
    }
}

pub async fn delete_venue(
    State(state): State<AppState>,
    WithRejection(Path(venue_id), _): RecordId,
) -> Response {
    let deleted = state
        .db
        .transaction::<_, (), AppError>(move |txn| {
            Box::pin(async move { VenueRepository::new(txn).delete(venue_id).await })
        })
        .await
        .map_err(AppError::from);

    match deleted {
        Ok(()) => {
            tracing::info!("Deleted venue {}", venue_id);
            home_with(Notice::success(format!("Venue ID {} deleted.", venue_id)))
        }
        Err(e) => {
            tracing::error!("Failed to delete venue {}: {}", venue_id, e);
            home_with(Notice::error(format!("Failed to delete Venue ID {}.", venue_id)))
        }
    }
}
