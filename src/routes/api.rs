use axum::{Json, extract::State};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

use crate::entities::prelude::{
    Appointment, Caregiver, Job, JobApplication, Member, User,
};
use crate::error::AppError;
use crate::reports::{self, AcceptedAppointment};
use crate::router::AppState;

/// Row counts per entity, as shown on the dashboard.
pub async fn api_stats(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let users = User::find().count(&state.db).await?;
    let caregivers = Caregiver::find().count(&state.db).await?;
    let members = Member::find().count(&state.db).await?;
    let jobs = Job::find().count(&state.db).await?;
    let applications = JobApplication::find().count(&state.db).await?;
    let appointments = Appointment::find().count(&state.db).await?;

    Ok(Json(json!({
        "users": users,
        "caregivers": caregivers,
        "members": members,
        "jobs": jobs,
        "applications": applications,
        "appointments": appointments,
    })))
}

/// The accepted-appointments report as JSON.
pub async fn api_accepted_appointments(
    State(state): State<AppState>,
) -> Result<Json<Vec<AcceptedAppointment>>, AppError> {
    let accepted = reports::accepted_appointments(&state.db).await?;
    Ok(Json(accepted))
}
