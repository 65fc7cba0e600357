use axum::{
    Form, Router,
    extract::{Path, Query, State},
    response::{Html, Redirect},
    routing::{get, post},
};
use minijinja::context;
use serde::Deserialize;
use tracing::{error, info};

use crate::crud;
use crate::crud::caregiver::{CaregiverChanges, NewCaregiver};
use crate::error::AppError;
use crate::router::AppState;

#[derive(Debug, Deserialize)]
pub struct CaregiverFilter {
    pub caregiving_type: Option<String>,
    pub city: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_caregivers))
        .route("/create", post(create_caregiver))
        .route("/update/{id}", post(update_caregiver))
        .route("/delete/{id}", post(delete_caregiver))
        .route("/apply-commission", post(apply_commission))
}

async fn list_caregivers(
    State(state): State<AppState>,
    Query(filter): Query<CaregiverFilter>,
) -> Result<Html<String>, AppError> {
    // Empty select values mean "no filter".
    let caregiving_type = filter.caregiving_type.as_deref().filter(|s| !s.is_empty());
    let city = filter.city.as_deref().filter(|s| !s.is_empty());

    let caregivers = crud::caregiver::search_caregivers(&state.db, caregiving_type, city).await?;
    let users = crud::user::list_users(&state.db).await?;

    let tmpl = state.templates.get_template("caregivers.html")?;
    let html = tmpl.render(context! {
        caregivers => caregivers,
        users => users,
        caregiving_type => caregiving_type.unwrap_or(""),
        city => city.unwrap_or(""),
        active => "caregivers",
    })?;
    Ok(Html(html))
}

async fn create_caregiver(
    State(state): State<AppState>,
    Form(input): Form<NewCaregiver>,
) -> Redirect {
    if let Err(e) = crud::caregiver::create_caregiver(&state.db, input).await {
        error!("failed to create caregiver: {e}");
    }
    Redirect::to("/caregivers")
}

async fn update_caregiver(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(changes): Form<CaregiverChanges>,
) -> Redirect {
    if let Err(e) = crud::caregiver::update_caregiver(&state.db, id, changes).await {
        error!("failed to update caregiver {id}: {e}");
    }
    Redirect::to("/caregivers")
}

async fn delete_caregiver(State(state): State<AppState>, Path(id): Path<i32>) -> Redirect {
    if let Err(e) = crud::caregiver::delete_caregiver(&state.db, id).await {
        error!("failed to delete caregiver {id}: {e}");
    }
    Redirect::to("/caregivers")
}

async fn apply_commission(State(state): State<AppState>) -> Redirect {
    match crud::caregiver::apply_rate_commission(&state.db).await {
        Ok(touched) => info!("adjusted hourly rates for {touched} caregivers"),
        Err(e) => error!("failed to apply commission: {e}"),
    }
    Redirect::to("/caregivers")
}
