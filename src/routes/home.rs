use axum::{extract::State, response::Html};
use minijinja::context;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::entities::prelude::{
    Appointment, Caregiver, Job, JobApplication, Member, User,
};
use crate::error::AppError;
use crate::router::AppState;

pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let users_count = User::find().count(&state.db).await?;
    let caregivers_count = Caregiver::find().count(&state.db).await?;
    let members_count = Member::find().count(&state.db).await?;
    let jobs_count = Job::find().count(&state.db).await?;
    let applications_count = JobApplication::find().count(&state.db).await?;
    let appointments_count = Appointment::find().count(&state.db).await?;

    let tmpl = state.templates.get_template("index.html")?;
    let html = tmpl.render(context! {
        active => "home",
        users_count => users_count,
        caregivers_count => caregivers_count,
        members_count => members_count,
        jobs_count => jobs_count,
        applications_count => applications_count,
        appointments_count => appointments_count,
    })?;

    Ok(Html(html))
}
