use axum::{
    extract::{Query, State},
    response::Html,
};
use minijinja::context;
use serde::Deserialize;

use crate::error::AppError;
use crate::reports;
use crate::router::AppState;

/// Filter knobs for the parameterized reports; defaults mirror the
/// questions the reporting module was built to answer.
#[derive(Debug, Deserialize)]
pub struct ReportParams {
    pub requirements: Option<String>,
    pub city: Option<String>,
    pub caregiving_type: Option<String>,
    pub house_rules: Option<String>,
}

pub async fn reports_page(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> Result<Html<String>, AppError> {
    let requirements = params
        .requirements
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "soft-spoken".to_string());
    let city = params
        .city
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Astana".to_string());
    let caregiving_type = params
        .caregiving_type
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "elderly_care".to_string());
    let house_rules = params
        .house_rules
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "No pets".to_string());

    let accepted = reports::accepted_appointments(&state.db).await?;
    let matching_jobs = reports::jobs_matching_requirements(&state.db, &requirements).await?;
    let seeking =
        reports::members_seeking_care(&state.db, &city, &caregiving_type, &house_rules).await?;
    let applicants = reports::applicants_per_job(&state.db).await?;
    let hours = reports::caregiver_hours(&state.db).await?;
    let average_pay = reports::caregiver_average_pay(&state.db).await?;
    let top_earners = reports::caregivers_above_average_earnings(&state.db).await?;
    let costs = reports::appointment_costs(&state.db).await?;
    let grand_total: f64 = costs.iter().map(|c| c.total_cost).sum();
    let overview = reports::job_application_overview(&state.db).await?;

    let tmpl = state.templates.get_template("reports.html")?;
    let html = tmpl.render(context! {
        active => "reports",
        requirements => requirements,
        city => city,
        caregiving_type => caregiving_type,
        house_rules => house_rules,
        accepted => accepted,
        matching_jobs => matching_jobs,
        seeking => seeking,
        applicants => applicants,
        hours => hours,
        average_pay => average_pay,
        top_earners => top_earners,
        costs => costs,
        grand_total => grand_total,
        overview => overview,
    })?;

    Ok(Html(html))
}
