use axum::{
    Form, Router,
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, post},
};
use minijinja::context;
use tracing::error;

use crate::crud;
use crate::crud::job::{JobChanges, NewJob};
use crate::error::AppError;
use crate::router::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_jobs))
        .route("/create", post(create_job))
        .route("/update/{id}", post(update_job))
        .route("/delete/{id}", post(delete_job))
}

async fn list_jobs(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let jobs = crud::job::list_jobs_with_poster(&state.db).await?;
    let members = crud::member::list_members_with_profile(&state.db).await?;

    let tmpl = state.templates.get_template("jobs.html")?;
    let html = tmpl.render(context! {
        jobs => jobs,
        members => members,
        active => "jobs",
    })?;
    Ok(Html(html))
}

async fn create_job(State(state): State<AppState>, Form(input): Form<NewJob>) -> Redirect {
    if let Err(e) = crud::job::create_job(&state.db, input).await {
        error!("failed to create job: {e}");
    }
    Redirect::to("/jobs")
}

async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(changes): Form<JobChanges>,
) -> Redirect {
    if let Err(e) = crud::job::update_job(&state.db, id, changes).await {
        error!("failed to update job {id}: {e}");
    }
    Redirect::to("/jobs")
}

async fn delete_job(State(state): State<AppState>, Path(id): Path<i32>) -> Redirect {
    if let Err(e) = crud::job::delete_job(&state.db, id).await {
        error!("failed to delete job {id}: {e}");
    }
    Redirect::to("/jobs")
}
