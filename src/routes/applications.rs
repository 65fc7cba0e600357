use axum::{
    Form, Router,
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, post},
};
use minijinja::context;
use tracing::error;

use crate::crud;
use crate::crud::job_application::{JobApplicationChanges, NewJobApplication};
use crate::error::AppError;
use crate::router::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_applications))
        .route("/create", post(create_application))
        .route("/update/{id}", post(update_application))
        .route("/delete/{id}", post(delete_application))
}

async fn list_applications(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let applications = crud::job_application::list_applications(&state.db).await?;
    let caregivers = crud::caregiver::search_caregivers(&state.db, None, None).await?;
    let jobs = crud::job::list_jobs(&state.db).await?;

    let tmpl = state.templates.get_template("applications.html")?;
    let html = tmpl.render(context! {
        applications => applications,
        caregivers => caregivers,
        jobs => jobs,
        active => "applications",
    })?;
    Ok(Html(html))
}

async fn create_application(
    State(state): State<AppState>,
    Form(input): Form<NewJobApplication>,
) -> Redirect {
    if let Err(e) = crud::job_application::create_application(&state.db, input).await {
        error!("failed to create application: {e}");
    }
    Redirect::to("/applications")
}

async fn update_application(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(changes): Form<JobApplicationChanges>,
) -> Redirect {
    if let Err(e) = crud::job_application::update_application(&state.db, id, changes).await {
        error!("failed to update application {id}: {e}");
    }
    Redirect::to("/applications")
}

async fn delete_application(State(state): State<AppState>, Path(id): Path<i32>) -> Redirect {
    if let Err(e) = crud::job_application::delete_application(&state.db, id).await {
        error!("failed to delete application {id}: {e}");
    }
    Redirect::to("/applications")
}
