use axum::{
    Form, Router,
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, post},
};
use minijinja::context;
use tracing::error;

use crate::crud;
use crate::crud::appointment::{AppointmentChanges, NewAppointment};
use crate::error::AppError;
use crate::router::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_appointments))
        .route("/create", post(create_appointment))
        .route("/update/{id}", post(update_appointment))
        .route("/delete/{id}", post(delete_appointment))
}

async fn list_appointments(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let appointments = crud::appointment::list_appointments_with_names(&state.db).await?;
    let caregivers = crud::caregiver::search_caregivers(&state.db, None, None).await?;
    let members = crud::member::list_members_with_profile(&state.db).await?;

    let tmpl = state.templates.get_template("appointments.html")?;
    let html = tmpl.render(context! {
        appointments => appointments,
        caregivers => caregivers,
        members => members,
        active => "appointments",
    })?;
    Ok(Html(html))
}

async fn create_appointment(
    State(state): State<AppState>,
    Form(input): Form<NewAppointment>,
) -> Redirect {
    if let Err(e) = crud::appointment::create_appointment(&state.db, input).await {
        error!("failed to create appointment: {e}");
    }
    Redirect::to("/appointments")
}

async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(changes): Form<AppointmentChanges>,
) -> Redirect {
    if let Err(e) = crud::appointment::update_appointment(&state.db, id, changes).await {
        error!("failed to update appointment {id}: {e}");
    }
    Redirect::to("/appointments")
}

async fn delete_appointment(State(state): State<AppState>, Path(id): Path<i32>) -> Redirect {
    if let Err(e) = crud::appointment::delete_appointment(&state.db, id).await {
        error!("failed to delete appointment {id}: {e}");
    }
    Redirect::to("/appointments")
}
