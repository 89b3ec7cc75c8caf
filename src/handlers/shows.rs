use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::Form;
use sea_orm::TransactionTrait;

use crate::{
    db::{entities::show, repositories::ShowRepository},
    error::{AppError, Result},
    forms::{FormErrors, ShowForm},
    services::{directory, schedule},
    state::AppState,
    templates::{home_page, show_form_page, shows_page, Notice},
};

pub async fn list_shows(State(state): State<AppState>) -> Result<Html<String>> {
    let shows = directory::show_listings(&state.db).await?;
    Ok(Html(shows_page(&shows).into_string()))
}

pub async fn create_show_form() -> Html<String> {
    let form = ShowForm::starting_at(schedule::now());
    Html(show_form_page(&form, &FormErrors::default(), None).into_string())
}

/// Book a show.
///
/// Both referenced rows are checked inside the transaction before anything is
/// inserted; a missing artist or venue redisplays the form naming the ids.
pub async fn create_show_submission(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> Response {
    let new_show = match form.validate() {
        Ok(new_show) => new_show,
        Err(errors) => {
            tracing::warn!("Rejected show submission: {:?}", errors);
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(show_form_page(&form, &errors, None).into_string()),
            )
                .into_response();
        }
    };

    let created = state
        .db
        .transaction::<_, show::Model, AppError>(move |txn| {
            Box::pin(async move { ShowRepository::new(txn).create_checked(new_show).await })
        })
        .await
        .map_err(AppError::from);

    match created {
        Ok(show) => {
            tracing::info!(
                "Listed show {} (artist {}, venue {})",
                show.id,
                show.artist_id,
                show.venue_id
            );
            let notice = Notice::success("Show was successfully listed!");
            Html(home_page(Some(&notice)).into_string()).into_response()
        }
        Err(AppError::InvalidReference(missing)) => {
            tracing::warn!("Show references missing rows: {:?}", missing);
            let notice = Notice::error(format!(
                "Show could not be listed. {}.",
                missing.join(". ")
            ));
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(show_form_page(&form, &FormErrors::default(), Some(&notice)).into_string()),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to list show: {}", e);
            let notice = Notice::error("An error occurred. Show could not be listed.");
            Html(home_page(Some(&notice)).into_string()).into_response()
        }
    }
}
